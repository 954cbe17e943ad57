//! `product-catalog [--type <TYPE>] [--min-efficacy <N>] [--crop <CROP>]`

use std::ffi::OsString;

use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use shared::{Product, ProductFilter, ProductType};

use super::{parse_failure, CommandResult};
use crate::config::Config;
use crate::error::AppResult;
use crate::services::CatalogService;

#[derive(Debug, Parser)]
#[command(
    name = "product-catalog",
    version,
    about = "List the products the advisor can recommend",
    after_help = "Examples:\n  product-catalog\n  product-catalog --type \"Pest Control\" --crop Cotton\n  product-catalog --min-efficacy 85"
)]
pub struct Args {
    /// Product type, e.g. "Disease Control" or disease-control
    #[arg(long = "type", value_name = "TYPE")]
    pub product_type: Option<ProductType>,

    /// Minimum efficacy percentage
    #[arg(long, value_name = "N")]
    pub min_efficacy: Option<f64>,

    /// Only products compatible with this crop
    #[arg(long, value_name = "CROP")]
    pub crop: Option<String>,
}

impl From<Args> for ProductFilter {
    fn from(args: Args) -> Self {
        ProductFilter {
            product_type: args.product_type,
            min_efficacy: args.min_efficacy,
            crop: args.crop,
        }
    }
}

/// Output document of `product-catalog`
#[derive(Debug, Serialize)]
pub struct CatalogListing {
    pub products: Vec<Product>,
    pub timestamp: DateTime<Utc>,
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

    CommandResult::from_result(list(args.into(), config, now), config.output.pretty)
}

fn list(filter: ProductFilter, config: &Config, now: DateTime<Utc>) -> AppResult<CatalogListing> {
    let catalog = CatalogService::from_config(&config.catalog)?;
    let products = catalog.search(&filter);

    tracing::info!(
        matched = products.len(),
        total = catalog.products().len(),
        "Filtered product catalog"
    );

    Ok(CatalogListing {
        products,
        timestamp: now,
    })
}
