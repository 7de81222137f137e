//! Application startup and exit-code mapping.
mod startup;

pub use startup::{launch, LaunchExit};
