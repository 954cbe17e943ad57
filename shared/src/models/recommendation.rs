//! Recommendation output models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Product;

/// How soon a product should be applied
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Urgency {
    Low,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Low => write!(f, "Low"),
            Urgency::Medium => write!(f, "Medium"),
            Urgency::MediumHigh => write!(f, "Medium-High"),
            Urgency::High => write!(f, "High"),
        }
    }
}

/// When to apply a recommended product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationTiming {
    /// Human-readable window, e.g. "Next 3 Days"
    pub window: String,
    pub urgency: Urgency,
    /// Target application date (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// A product scored against one of the farm's crops
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub product: Product,
    pub score: f64,
    pub application_timing: ApplicationTiming,
    pub crop_type: String,
}

/// Output document of a recommendation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub recommendations: Vec<Recommendation>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_labels_match_display() {
        for urgency in [Urgency::Low, Urgency::Medium, Urgency::MediumHigh, Urgency::High] {
            let json = serde_json::to_string(&urgency).unwrap();
            assert_eq!(json, format!("\"{}\"", urgency));
            assert_eq!(serde_json::from_str::<Urgency>(&json).unwrap(), urgency);
        }
    }
}
