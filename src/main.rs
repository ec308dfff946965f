use std::process::ExitCode;

use sql_loader::cli::Cli;
use sql_loader::{PreparedRun, BUILD_INFO};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    if cli.version {
        println!("{BUILD_INFO}");
        return ExitCode::SUCCESS;
    }

    let config = cli.into_config();
    let prepared = match PreparedRun::open(&config).await {
        Ok(prepared) => prepared,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Loading SQL script from {} into {} database",
        config.file.display(),
        config.driver
    );
    let outcome = prepared.execute().await;
    if let Some(err) = &outcome.close_error {
        eprintln!("Warning: {err}");
    }

    match outcome.result {
        Ok(report) => {
            println!(
                "Script executed successfully ({} statements)",
                report.statements_executed
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
