//! Entry point for the QuantumWatch launcher.
use std::process::ExitCode;

use quantumwatch::{
    cli,
    runtime::{self, LaunchExit},
    telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), LaunchExit> {
    telemetry::init_tracing().map_err(LaunchExit::from_error)?;
    let config = cli::parse_process_args();
    runtime::launch(config).await
}
