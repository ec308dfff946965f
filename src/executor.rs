//! Statement splitting and sequential execution.
//!
//! Splitting is purely lexical on `;`. A semicolon inside a string literal,
//! a comment, or a procedural body ends the statement early.

use tracing::{debug, info};

use crate::error::{Result, SqlLoaderError};
use crate::traits::DatabaseDriver;

/// Outcome of a script that ran to completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub statements_executed: usize,
}

/// Split a script into trimmed, non-empty statements in source order.
pub fn split_statements(script: &str) -> Vec<&str> {
    let script = script.trim();
    if script.is_empty() {
        return Vec::new();
    }

    script
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Execute every statement of `script` in order, stopping at the first failure.
///
/// No transaction is opened: statements that ran before a failure stay applied.
pub async fn execute_script(driver: &dyn DatabaseDriver, script: &str) -> Result<ExecutionReport> {
    let statements = split_statements(script);
    if statements.is_empty() {
        debug!("script contains no statements");
        return Ok(ExecutionReport::default());
    }

    let total = statements.len();
    for (index, statement) in statements.into_iter().enumerate() {
        let position = index + 1;
        debug!(position, total, "executing statement");

        driver
            .execute(statement)
            .await
            .map_err(|source| SqlLoaderError::StatementExecution {
                position,
                statement: statement.to_string(),
                source,
            })?;
    }

    info!(statements = total, "script executed");
    Ok(ExecutionReport {
        statements_executed: total,
    })
}
