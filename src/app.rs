//! The QuantumWatch application object driven by the launcher.

use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, info};

use crate::{cli::LaunchConfig, errors::AppError};

/// Application object constructed once per process from the launch
/// configuration.
pub struct QuantumWatch {
    config: LaunchConfig,
}

impl QuantumWatch {
    /// Build the application from an already-parsed configuration.
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    /// Run the application to completion.
    ///
    /// Reads the configured input when one was given and, when an output
    /// path was also given, writes a short watch report there. Either IO
    /// failure propagates to the launcher untouched.
    pub async fn execute(&self) -> Result<(), AppError> {
        info!(target: "quantumwatch::app", "Starting QuantumWatch");
        if self.config.verbose {
            debug!(
                target: "quantumwatch::app",
                input = self.config.input.as_deref(),
                output = self.config.output.as_deref(),
                "Launch configuration"
            );
        }

        let Some(input) = self.config.input.as_deref() else {
            return Ok(());
        };

        let input_path = PathBuf::from(input);
        let contents = fs::read_to_string(&input_path)
            .await
            .map_err(|err| AppError::from_input_error(input_path.clone(), err))?;
        info!(
            target: "quantumwatch::app",
            path = %input_path.display(),
            bytes = contents.len(),
            "Read input"
        );

        if let Some(output) = self.config.output.as_deref() {
            let output_path = PathBuf::from(output);
            let report = format!(
                "quantumwatch report\ninput: {}\nbytes: {}\nlines: {}\n",
                input_path.display(),
                contents.len(),
                contents.lines().count()
            );
            fs::write(&output_path, report)
                .await
                .map_err(|err| AppError::from_output_error(output_path.clone(), err))?;
            info!(
                target: "quantumwatch::app",
                path = %output_path.display(),
                "Wrote report"
            );
        }

        Ok(())
    }
}
