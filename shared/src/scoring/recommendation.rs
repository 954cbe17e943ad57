//! Product scoring and application scheduling

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ApplicationTiming, Crop, Product, ProductType, Recommendation, RecommendationRequest,
    RiskAssessment, Urgency,
};

/// Most recommendations kept for any one crop
pub const MAX_RECOMMENDATIONS_PER_CROP: usize = 3;

const BASE_SCORE: f64 = 30.0;
const EFFICACY_WEIGHT: f64 = 0.2;

/// The risk reading a product responds to, when the assessment has one
#[derive(Debug, Clone, Copy, PartialEq)]
enum RiskDriver {
    Pest(f64),
    Disease(f64),
    SoilHealth(f64),
    Climate(f64),
}

impl RiskDriver {
    /// Pick the reading matching the product type. Pest, disease and climate
    /// come from the crop's profile; soil health is farm-wide.
    fn for_product(
        product_type: ProductType,
        crop_type: &str,
        assessment: &RiskAssessment,
    ) -> Option<Self> {
        let crop = assessment.crop(crop_type);
        match product_type {
            ProductType::PestControl => crop
                .and_then(|c| c.pest.as_ref())
                .map(|r| RiskDriver::Pest(r.overall)),
            ProductType::DiseaseControl => crop
                .and_then(|c| c.disease.as_ref())
                .map(|r| RiskDriver::Disease(r.overall)),
            ProductType::SoilHealth => assessment
                .soil_health
                .as_ref()
                .map(|s| RiskDriver::SoilHealth(s.overall)),
            ProductType::GrowthPromoter => crop
                .and_then(|c| c.climate.as_ref())
                .map(|r| RiskDriver::Climate(r.overall)),
        }
    }

    fn score_bonus(self) -> f64 {
        match self {
            RiskDriver::Pest(risk) | RiskDriver::Disease(risk) => risk * 0.5,
            // poorer soil makes a soil product more valuable
            RiskDriver::SoilHealth(health) => (100.0 - health) * 0.4,
            RiskDriver::Climate(stress) => stress * 0.3,
        }
    }

    fn timing(self, today: NaiveDate) -> ApplicationTiming {
        match self {
            RiskDriver::Pest(risk) | RiskDriver::Disease(risk) if risk > 80.0 => {
                window("Next 3 Days", Urgency::High, 3, today)
            }
            RiskDriver::Pest(risk) | RiskDriver::Disease(risk) if risk > 60.0 => {
                window("Within 5 Days", Urgency::MediumHigh, 5, today)
            }
            RiskDriver::Pest(_) | RiskDriver::Disease(_) => default_timing(today),
            RiskDriver::SoilHealth(health) if health < 40.0 => {
                window("Within 10 Days", Urgency::Medium, 10, today)
            }
            RiskDriver::SoilHealth(_) => window("Within 14 Days", Urgency::Low, 14, today),
            RiskDriver::Climate(stress) if stress > 70.0 => {
                window("Within 5 Days", Urgency::MediumHigh, 5, today)
            }
            RiskDriver::Climate(_) => window("Within 10 Days", Urgency::Medium, 10, today),
        }
    }
}

fn window(label: &str, urgency: Urgency, days: i64, today: NaiveDate) -> ApplicationTiming {
    ApplicationTiming {
        window: label.to_string(),
        urgency,
        date: today + Duration::days(days),
    }
}

fn default_timing(today: NaiveDate) -> ApplicationTiming {
    window("Within 7 Days", Urgency::Medium, 7, today)
}

/// Suitability score of a product for a crop
///
/// Incompatible products score exactly 0. Compatible products start at 30,
/// gain a bonus from the one risk reading their type responds to, and add a
/// fifth of their efficacy. The result is not capped.
pub fn score_product(product: &Product, crop_type: &str, assessment: &RiskAssessment) -> f64 {
    if !product.is_compatible_with(crop_type) {
        return 0.0;
    }

    let mut score = BASE_SCORE;
    if let Some(driver) = RiskDriver::for_product(product.product_type, crop_type, assessment) {
        score += driver.score_bonus();
    }
    score += product.efficacy * EFFICACY_WEIGHT;
    score
}

/// Application window for a product on a crop, relative to `today`
///
/// Falls back to "Within 7 Days" / Medium when the assessment lacks the
/// reading the product type responds to.
pub fn compute_application_timing(
    product: &Product,
    crop_type: &str,
    assessment: &RiskAssessment,
    today: NaiveDate,
) -> ApplicationTiming {
    RiskDriver::for_product(product.product_type, crop_type, assessment)
        .map_or_else(|| default_timing(today), |driver| driver.timing(today))
}

/// Ranked product recommendations for a farm
///
/// Crops missing from the assessment are skipped and a crop listed twice is
/// handled once. Each crop keeps its best [`MAX_RECOMMENDATIONS_PER_CROP`]
/// products; the combined list is ordered by score, highest first, with
/// ties kept in crop then catalog order.
pub fn generate_recommendations(
    crops: &[Crop],
    assessment: &RiskAssessment,
    products: &[Product],
    today: NaiveDate,
) -> Vec<Recommendation> {
    let mut seen = HashSet::new();
    let mut recommendations = Vec::new();

    for crop in crops {
        let crop_type = crop.crop_type.as_str();
        if !seen.insert(crop_type) {
            continue;
        }
        if assessment.crop(crop_type).is_none() {
            debug!(crop = crop_type, "no risk profile for crop, skipping");
            continue;
        }

        let mut candidates: Vec<Recommendation> = products
            .iter()
            .filter_map(|product| {
                let score = score_product(product, crop_type, assessment);
                (score > 0.0).then(|| Recommendation {
                    product: product.clone(),
                    score,
                    application_timing: compute_application_timing(
                        product, crop_type, assessment, today,
                    ),
                    crop_type: crop_type.to_string(),
                })
            })
            .collect();

        sort_by_score(&mut candidates);
        candidates.truncate(MAX_RECOMMENDATIONS_PER_CROP);

        debug!(crop = crop_type, kept = candidates.len(), "ranked products");
        recommendations.extend(candidates);
    }

    sort_by_score(&mut recommendations);
    recommendations
}

/// Recommendations for a request document
///
/// A request that lists crops must carry a risk assessment. Without crops
/// there is nothing to rank and the result is empty.
pub fn recommend_for_request(
    request: &RecommendationRequest,
    products: &[Product],
    today: NaiveDate,
) -> EngineResult<Vec<Recommendation>> {
    let crops = &request.farm_data.crops;
    match &request.risk_assessment {
        Some(assessment) => Ok(generate_recommendations(crops, assessment, products, today)),
        None if crops.is_empty() => Ok(Vec::new()),
        None => Err(EngineError::InvalidInput(
            "riskAssessment with cropRisks is required when crops are listed".to_string(),
        )),
    }
}

/// Stable sort, highest score first
fn sort_by_score(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
}
