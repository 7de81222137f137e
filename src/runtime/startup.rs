use std::process::ExitCode;

use anyhow::Error;
use tracing::debug;

use crate::{app::QuantumWatch, cli::LaunchConfig};

/// Bundles a launch failure message with the process exit code to report.
#[derive(Debug)]
pub struct LaunchExit {
    message: String,
    exit_code: ExitCode,
}

impl LaunchExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Print the failure to stderr and yield the exit code for `main`.
    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Construct the application with `config` and await its execution once.
///
/// There is exactly one suspension point and no retry, timeout, or
/// cancellation: the application either runs to completion or its failure
/// is mapped to a non-zero exit.
pub async fn launch(config: LaunchConfig) -> Result<(), LaunchExit> {
    debug!(target: "quantumwatch::runtime", ?config, "Launching application");
    let app = QuantumWatch::new(config);
    app.execute().await.map_err(LaunchExit::from_error)
}
