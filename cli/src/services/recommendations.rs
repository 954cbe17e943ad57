//! Recommendation service

use std::path::Path;

use chrono::{DateTime, Utc};
use shared::{recommend_for_request, Product, RecommendationReport, RecommendationRequest};

use crate::error::AppResult;
use crate::input::read_json;

/// Ranks catalog products against a farm's risk assessment
#[derive(Debug, Clone)]
pub struct RecommendationService {
    catalog: Vec<Product>,
}

impl RecommendationService {
    pub fn new(catalog: Vec<Product>) -> Self {
        Self { catalog }
    }

    /// Build recommendations as of `now`; application dates count from its UTC date
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
        now: DateTime<Utc>,
    ) -> AppResult<RecommendationReport> {
        tracing::info!(
            crops = request.farm_data.crops.len(),
            assessed = request.risk_assessment.as_ref().map(|a| a.crop_risks.len()),
            products = self.catalog.len(),
            "Generating recommendations"
        );

        let recommendations = recommend_for_request(request, &self.catalog, now.date_naive())?;

        tracing::info!(count = recommendations.len(), "Recommendations ready");

        Ok(RecommendationReport {
            recommendations,
            timestamp: now,
        })
    }

    /// Read a recommendation request document and answer it
    pub fn recommend_file(&self, path: &Path, now: DateTime<Utc>) -> AppResult<RecommendationReport> {
        let request: RecommendationRequest = read_json(path)?;
        self.recommend(&request, now)
    }
}
