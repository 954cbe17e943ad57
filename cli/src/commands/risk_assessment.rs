//! `risk-assessment <INPUT>`

use std::ffi::OsString;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;

use super::{parse_failure, CommandResult};
use crate::config::Config;
use crate::services::RiskAssessmentService;

#[derive(Debug, Parser)]
#[command(
    name = "risk-assessment",
    version,
    about = "Score disease, pest, climate and soil risk for a farm",
    after_help = "Example:\n  risk-assessment farm.json"
)]
pub struct Args {
    /// JSON document with weatherData, soilData and crops
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

pub fn run<I, T>(args: I, config: &Config, now: DateTime<Utc>) -> CommandResult
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(error) => return parse_failure(error),
    };

    let result = RiskAssessmentService::new().assess_file(&args.input, now);
    CommandResult::from_result(result, config.output.pretty)
}
