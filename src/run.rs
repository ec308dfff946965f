use tracing::{info, warn};

use crate::client::LoaderClient;
use crate::config::LoaderConfig;
use crate::error::{Result, SqlLoaderError};
use crate::executor::ExecutionReport;
use crate::loader;

/// Result of one load → connect → execute → close run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Success or the first error of the run.
    pub result: Result<ExecutionReport>,
    /// Set when releasing the connection failed; does not change `result`.
    pub close_error: Option<SqlLoaderError>,
}

impl RunOutcome {
    fn failed(err: SqlLoaderError) -> Self {
        Self {
            result: Err(err),
            close_error: None,
        }
    }
}

/// A loaded script and a reachable connection, ready to execute.
pub struct PreparedRun {
    client: LoaderClient,
    script: String,
}

impl PreparedRun {
    /// Validate `config`, load the script, then connect.
    /// The script is read before any connection is opened.
    pub async fn open(config: &LoaderConfig) -> Result<Self> {
        config.validate()?;
        let script = loader::load_script(&config.file)?;
        let client = LoaderClient::connect(config.driver, &config.dsn).await?;

        info!(
            file = %config.file.display(),
            driver = %config.driver,
            "loading SQL script"
        );
        Ok(Self::new(client, script))
    }

    pub fn new(client: LoaderClient, script: impl Into<String>) -> Self {
        Self {
            client,
            script: script.into(),
        }
    }

    /// Execute the script and close the connection, whatever the script's result.
    pub async fn execute(self) -> RunOutcome {
        let Self { client, script } = self;
        let result = client.execute_script(&script).await;

        let close_error = client.close().await.err();
        if let Some(err) = &close_error {
            warn!(error = %err, "connection was not released cleanly");
        }

        RunOutcome {
            result,
            close_error,
        }
    }
}

/// Run a script end to end.
///
/// The connection is closed exactly once whenever it was opened, whether or
/// not the script succeeded.
pub async fn run(config: &LoaderConfig) -> RunOutcome {
    match PreparedRun::open(config).await {
        Ok(prepared) => prepared.execute().await,
        Err(err) => RunOutcome::failed(err),
    }
}
