//! Risk assessment models

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A 0-100 risk score together with the sub-scores it was derived from
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RiskFactor<F> {
    pub overall: f64,
    #[serde(default)]
    pub factors: F,
}

/// Sub-scores behind the disease risk
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DiseaseFactors {
    pub humidity: f64,
    pub temperature: f64,
    pub rainfall: f64,
}

/// Sub-scores behind the pest risk
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PestFactors {
    pub temperature: f64,
    pub humidity: f64,
}

/// Sub-scores behind the climate stress
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ClimateFactors {
    pub heat: f64,
    pub drought: f64,
    pub flood: f64,
}

pub type DiseaseRisk = RiskFactor<DiseaseFactors>;
pub type PestRisk = RiskFactor<PestFactors>;
pub type ClimateStress = RiskFactor<ClimateFactors>;

/// Risk profile of a single crop
///
/// The risk engine always fills every entry. Entries may be missing when a
/// profile is read back from a recommendation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CropRiskProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease: Option<DiseaseRisk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pest: Option<PestRisk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate: Option<ClimateStress>,
}

/// Soil health sub-scores, each 0-100
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SoilFactors {
    pub nutrients: f64,
    pub structure: f64,
    pub biology: f64,
}

/// Soil health of the farm; higher is healthier
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SoilHealthProfile {
    pub overall: f64,
    #[serde(default)]
    pub factors: SoilFactors,
}

/// Worst disease, pest and climate scores across all assessed crops
///
/// Informational only; a partial block read back from a request is
/// filled with zeros.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverallRisk {
    pub disease: f64,
    pub pest: f64,
    pub climate: f64,
}

/// Output of the risk assessment engine, input of the recommendation engine
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub crop_risks: BTreeMap<String, CropRiskProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_health: Option<SoilHealthProfile>,
    /// Written as RFC 3339 UTC; read from any ISO-8601 date or date-time
    #[serde(
        default,
        deserialize_with = "deserialize_iso_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_risk: Option<OverallRisk>,
}

/// Parse an ISO-8601 timestamp. Values without an offset are taken as UTC.
pub fn parse_iso_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Some(at.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn deserialize_iso_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| {
        parse_iso_timestamp(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid ISO-8601 timestamp: {}", value))
        })
    })
    .transpose()
}

impl RiskAssessment {
    /// Risk profile for a crop type, if that crop was assessed
    pub fn crop(&self, crop_type: &str) -> Option<&CropRiskProfile> {
        self.crop_risks.get(crop_type)
    }
}
