//! Validation for operator-supplied product catalogs
//!
//! Farm inputs are not validated beyond what the engines need to avoid
//! faults. A catalog file replaces the built-in products wholesale, so each
//! entry is checked before it is used for scoring.

use std::collections::HashSet;

use validator::Validate;

use crate::error::{EngineError, EngineResult};
use crate::models::Product;

/// Validate a single catalog entry
pub fn validate_product(product: &Product) -> EngineResult<()> {
    product.validate().map_err(|errors| {
        EngineError::InvalidCatalog(format!(
            "product {} ({}): {}",
            product.id, product.name, errors
        ))
    })
}

/// Validate a whole catalog: non-empty, unique ids, every entry valid
pub fn validate_catalog(products: &[Product]) -> EngineResult<()> {
    if products.is_empty() {
        return Err(EngineError::InvalidCatalog(
            "catalog contains no products".to_string(),
        ));
    }

    let mut ids = HashSet::new();
    for product in products {
        if !ids.insert(product.id) {
            return Err(EngineError::InvalidCatalog(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        validate_product(product)?;
    }

    Ok(())
}
