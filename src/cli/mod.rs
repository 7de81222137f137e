//! CLI entrypoint module structure.
pub mod args;

pub use args::{parse_args, parse_process_args, LaunchConfig};
