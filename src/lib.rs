//! Library crate root for the QuantumWatch launcher.

pub mod app;
pub mod cli;
pub mod errors;
pub mod runtime;
pub mod telemetry;
