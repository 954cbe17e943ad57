//! Error handling for the crop advisor command-line tools
//!
//! Every failure is reported the same way: a `{"error": "<message>"}`
//! document on stdout and exit code 1.

use std::path::PathBuf;

use serde::Serialize;
use shared::EngineError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Usage errors
    #[error("{0}")]
    Usage(String),

    // Input errors
    #[error("Cannot read input file {}: {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Computation errors
    #[error(transparent)]
    Computation(#[from] EngineError),

    // Environment errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Cannot serialize output: {0}")]
    Output(#[source] serde_json::Error),
}

/// Error document written to stdout
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Render the error as its JSON document
    pub fn to_envelope(&self) -> String {
        let response = ErrorResponse {
            error: self.to_string(),
        };
        serde_json::to_string(&response)
            .unwrap_or_else(|_| r#"{"error":"unrenderable error"}"#.to_string())
    }
}

/// Result type alias for commands and services
pub type AppResult<T> = Result<T, AppError>;
