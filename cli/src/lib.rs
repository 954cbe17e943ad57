//! Command-line front end for the crop advisor engines
//!
//! Each binary reads one JSON document, runs an engine from `shared`, and
//! writes one JSON document to stdout. Failures become `{"error": ...}` with
//! exit code 1.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod services;

pub use commands::CommandResult;
pub use config::Config;
pub use error::{AppError, AppResult};
