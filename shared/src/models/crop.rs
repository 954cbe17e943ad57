//! Crop and farm input models

use serde::{Deserialize, Serialize};

use super::{RiskAssessment, SoilSample, WeatherObservation};

/// A crop grown on the farm, identified by its free-text type label
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Crop {
    #[serde(rename = "type", default)]
    pub crop_type: String,
}

impl Crop {
    pub fn new(crop_type: impl Into<String>) -> Self {
        Self {
            crop_type: crop_type.into(),
        }
    }
}

/// Input document for a risk assessment run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmRiskInput {
    #[serde(default)]
    pub weather_data: Vec<WeatherObservation>,
    #[serde(default)]
    pub soil_data: SoilSample,
    #[serde(default)]
    pub crops: Vec<Crop>,
}

/// The farm section of a recommendation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmProfile {
    #[serde(default)]
    pub crops: Vec<Crop>,
}

/// Input document for a recommendation run
///
/// `riskAssessment` may be left out only when the farm lists no crops.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub farm_data: FarmProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<RiskAssessment>,
}
