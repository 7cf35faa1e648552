//! Input/output operations, configuration and error handling

/// Command-line arguments and the run driver
pub mod cli;
/// Crate constants and configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Terminal progress display
pub mod progress;
