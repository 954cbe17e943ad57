//! Product catalog service

use std::path::Path;

use shared::{builtin_products, filter_products, validate_catalog, Product, ProductFilter};

use crate::config::CatalogConfig;
use crate::error::AppResult;
use crate::input::read_json;

/// Source of the products the advisor can recommend
#[derive(Debug, Clone)]
pub struct CatalogService {
    products: Vec<Product>,
}

impl CatalogService {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in catalog, or the validated catalog file named in config
    pub fn from_config(config: &CatalogConfig) -> AppResult<Self> {
        match &config.path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::new(builtin_products())),
        }
    }

    /// Load and validate a JSON array of products
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let products: Vec<Product> = read_json(path)?;
        validate_catalog(&products)?;

        tracing::info!(
            path = %path.display(),
            products = products.len(),
            "Loaded product catalog"
        );

        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    /// Products matching the filter, in catalog order
    pub fn search(&self, filter: &ProductFilter) -> Vec<Product> {
        filter_products(&self.products, filter)
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(builtin_products())
    }
}
