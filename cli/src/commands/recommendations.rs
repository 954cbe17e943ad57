//! `recommendations <INPUT>`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Parser;
use shared::RecommendationReport;

use super::{parse_failure, CommandResult};
use crate::config::Config;
use crate::error::AppResult;
use crate::services::{CatalogService, RecommendationService};

#[derive(Debug, Parser)]
#[command(
    name = "recommendations",
    version,
    about = "Rank biological products against a farm's risk assessment",
    after_help = "Example:\n  recommendations request.json"
)]
pub struct Args {
    /// JSON document with farmData and riskAssessment
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

    CommandResult::from_result(recommend(&args.input, config, now), config.output.pretty)
}

fn recommend(input: &Path, config: &Config, now: DateTime<Utc>) -> AppResult<RecommendationReport> {
    let catalog = CatalogService::from_config(&config.catalog)?;
    RecommendationService::new(catalog.into_products()).recommend_file(input, now)
}
