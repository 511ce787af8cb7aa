//! Error types for the logging subsystem

use thiserror::Error;

/// Errors that can occur while setting up logging
#[derive(Debug, Clone, Error)]
pub enum LoggingError {
    /// The global subscriber could not be installed
    #[error("failed to initialize logging: {0}")]
    InitializationFailed(String),
    /// The configured filter directive did not parse
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),
}
