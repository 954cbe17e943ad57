//! Command entry points behind the binaries

pub mod product_catalog;
pub mod recommendations;
pub mod risk_assessment;

use std::ffi::OsString;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::error::ErrorKind;
use serde::Serialize;

use crate::config::{Config, LoggingConfig};
use crate::error::{AppError, AppResult};
use crate::logging;

/// Message reported when a command is run without its input path
pub const MISSING_INPUT: &str = "No input file provided";

/// What a command prints to stdout and the exit code it ends with
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

impl CommandResult {
    pub fn success<T: Serialize>(value: &T, pretty: bool) -> Self {
        let rendered = if pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };

        match rendered {
            Ok(output) => Self {
                exit_code: 0,
                output,
            },
            Err(source) => Self::failure(AppError::Output(source)),
        }
    }

    pub fn failure(error: AppError) -> Self {
        tracing::error!(error = %error, "command failed");
        Self {
            exit_code: error.exit_code(),
            output: error.to_envelope(),
        }
    }

    pub fn from_result<T: Serialize>(result: AppResult<T>, pretty: bool) -> Self {
        match result {
            Ok(value) => Self::success(&value, pretty),
            Err(error) => Self::failure(error),
        }
    }

    /// Print the output and hand back the process exit code
    pub fn emit(self) -> ExitCode {
        println!("{}", self.output);
        ExitCode::from(self.exit_code)
    }
}

/// Map a clap parse failure onto the command contract.
///
/// Help and version text are printed as-is with exit code 0. Every other
/// parse failure becomes a usage error envelope.
pub(crate) fn parse_failure(error: clap::Error) -> CommandResult {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CommandResult {
            exit_code: 0,
            output: error.render().to_string().trim_end().to_string(),
        },
        ErrorKind::MissingRequiredArgument => {
            CommandResult::failure(AppError::Usage(MISSING_INPUT.to_string()))
        }
        _ => {
            let rendered = error.render().to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string();
            CommandResult::failure(AppError::Usage(message))
        }
    }
}

/// Process bootstrap shared by every binary: load `.env` and configuration,
/// install logging, then run the command against the process arguments and
/// the current time.
pub fn execute<F>(command: F) -> ExitCode
where
    F: FnOnce(Vec<OsString>, &Config, DateTime<Utc>) -> CommandResult,
{
    dotenvy::dotenv().ok();

    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            logging::init(&LoggingConfig::default());
            return CommandResult::failure(error.into()).emit();
        }
    };
    logging::init(&config.logging);

    tracing::debug!(environment = %config.environment, "configuration loaded");

    command(std::env::args_os().collect(), &config, Utc::now()).emit()
}
