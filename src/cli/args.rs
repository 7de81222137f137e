//! `LaunchConfig` and the permissive argument scanner.
use std::env;

/// Immutable launch configuration built once from the process arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Enable verbose (debug-level) application logging.
    pub verbose: bool,
    /// Optional input path handed to the application.
    pub input: Option<String>,
    /// Optional output path handed to the application.
    pub output: Option<String>,
}

/// Scan the argument tokens (argv without the program name) into a
/// `LaunchConfig`.
///
/// The scanner is permissive: unknown flags and positional tokens are
/// skipped, a value flag at the end of the sequence is ignored, and a
/// repeated flag keeps its last value. It never fails; absent flags leave
/// the corresponding fields at their defaults.
pub fn parse_args(tokens: &[String]) -> LaunchConfig {
    let mut config = LaunchConfig::default();
    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        match token.as_str() {
            "--verbose" | "-v" => config.verbose = true,
            "--input" | "-i" => {
                if let Some(value) = iter.next() {
                    config.input = Some(value.clone());
                }
            }
            "--output" | "-o" => {
                if let Some(value) = iter.next() {
                    config.output = Some(value.clone());
                }
            }
            _ => {}
        }
    }
    config
}

/// Collect the process arguments (skipping the program name) and parse them.
///
/// `main` goes through this so the scanner itself never reads ambient
/// process state and stays unit-testable with explicit token slices.
pub fn parse_process_args() -> LaunchConfig {
    let tokens: Vec<String> = env::args().skip(1).collect();
    parse_args(&tokens)
}
