//! Soil sample models
//!
//! Every group and every reading is optional. A missing reading contributes
//! nothing to its sub-score; unknown keys in the input are ignored.

use serde::{Deserialize, Serialize};

/// A soil sample taken from the farm
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SoilSample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<SoilNutrients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<SoilStructure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biology: Option<SoilBiology>,
}

/// Macro-nutrient indices (roughly 0-100)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SoilNutrients {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nitrogen: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phosphorus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
}

/// Physical structure readings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoilStructure {
    /// Organic matter, % by weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organic_matter: Option<f64>,
    /// Compaction index; lower is looser soil
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compaction: Option<f64>,
}

/// Biological activity indices
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoilBiology {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microbial_activity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earthworms: Option<f64>,
}
