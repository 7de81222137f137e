use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures surfaced by the application's asynchronous execution.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configured input path could not be read.
    #[error("Failed to read input {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The configured output path could not be written.
    #[error("Failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// Wrap an IO failure on the input path.
    pub fn from_input_error(path: PathBuf, source: io::Error) -> Self {
        Self::InputRead { path, source }
    }

    /// Wrap an IO failure on the output path.
    pub fn from_output_error(path: PathBuf, source: io::Error) -> Self {
        Self::OutputWrite { path, source }
    }
}
