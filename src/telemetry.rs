//! Telemetry initialization.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` with an env-driven filter, writing to stderr.
///
/// Stdout is left untouched so the launcher's own output contract (nothing
/// on success, the failure value on stderr) is not polluted by log lines.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}
