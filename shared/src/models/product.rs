//! Biological product catalog models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Compatibility entry that matches every crop
pub const ALL_CROPS: &str = "All crops";

/// A product that can be recommended to a farm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    #[validate(length(min = 1, message = "product name must not be empty"))]
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    /// Field efficacy rating, 0-100
    #[validate(range(min = 0.0, max = 100.0, message = "efficacy must be between 0 and 100"))]
    pub efficacy: f64,
    /// Crop types the product is registered for, or [`ALL_CROPS`]
    #[validate(length(min = 1, message = "compatibility must list at least one crop"))]
    pub compatibility: Vec<String>,
    pub application_timing: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_conditions: Option<String>,
}

impl Product {
    /// Exact, case-sensitive compatibility check
    pub fn is_compatible_with(&self, crop_type: &str) -> bool {
        self.compatibility
            .iter()
            .any(|c| c == crop_type || c == ALL_CROPS)
    }
}

/// Product categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProductType {
    #[serde(rename = "Pest Control")]
    PestControl,
    #[serde(rename = "Disease Control")]
    DiseaseControl,
    #[serde(rename = "Soil Health")]
    SoilHealth,
    #[serde(rename = "Growth Promoter")]
    GrowthPromoter,
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [
        ProductType::PestControl,
        ProductType::DiseaseControl,
        ProductType::SoilHealth,
        ProductType::GrowthPromoter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::PestControl => "Pest Control",
            ProductType::DiseaseControl => "Disease Control",
            ProductType::SoilHealth => "Soil Health",
            ProductType::GrowthPromoter => "Growth Promoter",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ProductType {
    type Err = String;

    /// Accepts the display label or a kebab/snake-case spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        ProductType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown product type: {}", s))
    }
}
