//! WebAssembly bindings for the crop advisor
//!
//! Provides client-side computation for:
//! - Farm risk assessment
//! - Product recommendations
//! - Product scoring and catalog lookups
//!
//! Documents cross the boundary as JSON strings. The reference time is
//! always supplied by the caller as an RFC 3339 timestamp.

use chrono::{DateTime, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::{
    assess_farm, builtin_products, filter_products, recommend_for_request, score_product,
    FarmRiskInput, Product, ProductFilter, ProductType, RecommendationReport, RecommendationRequest,
    RiskAssessment,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log(&format!("crop advisor engines loaded ({} products)", builtin_products().len()));
}

/// Assess a farm input document (`weatherData`, `soilData`, `crops`)
#[wasm_bindgen]
pub fn assess_risk(input_json: &str, timestamp: &str) -> Result<String, JsValue> {
    assess_risk_json(input_json, timestamp).map_err(to_js_error)
}

/// Answer a recommendation request (`farmData`, `riskAssessment`) from the
/// built-in catalog
#[wasm_bindgen]
pub fn recommend(request_json: &str, timestamp: &str) -> Result<String, JsValue> {
    recommend_json(request_json, timestamp).map_err(to_js_error)
}

/// Score a single product for a crop against a risk assessment
#[wasm_bindgen]
pub fn score_product_json(
    product_json: &str,
    crop_type: &str,
    assessment_json: &str,
) -> Result<f64, JsValue> {
    score_json(product_json, crop_type, assessment_json).map_err(to_js_error)
}

/// Built-in products narrowed by type label, minimum efficacy and crop
#[wasm_bindgen]
pub fn list_products(
    product_type: Option<String>,
    min_efficacy: Option<f64>,
    crop: Option<String>,
) -> Result<String, JsValue> {
    list_products_json(product_type.as_deref(), min_efficacy, crop).map_err(to_js_error)
}

fn assess_risk_json(input_json: &str, timestamp: &str) -> Result<String, String> {
    let input: FarmRiskInput = parse("farm input", input_json)?;
    let at = parse_timestamp(timestamp)?;
    let assessment = assess_farm(&input, at).map_err(|e| e.to_string())?;
    to_json(&assessment)
}

fn recommend_json(request_json: &str, timestamp: &str) -> Result<String, String> {
    let request: RecommendationRequest = parse("recommendation request", request_json)?;
    let at = parse_timestamp(timestamp)?;
    let recommendations = recommend_for_request(&request, &builtin_products(), at.date_naive())
        .map_err(|e| e.to_string())?;
    to_json(&RecommendationReport {
        recommendations,
        timestamp: at,
    })
}

fn score_json(product_json: &str, crop_type: &str, assessment_json: &str) -> Result<f64, String> {
    let product: Product = parse("product", product_json)?;
    let assessment: RiskAssessment = parse("risk assessment", assessment_json)?;
    Ok(score_product(&product, crop_type, &assessment))
}

fn list_products_json(
    product_type: Option<&str>,
    min_efficacy: Option<f64>,
    crop: Option<String>,
) -> Result<String, String> {
    let filter = ProductFilter {
        product_type: product_type.map(str::parse::<ProductType>).transpose()?,
        min_efficacy,
        crop,
    };
    to_json(&filter_products(&builtin_products(), &filter))
}

fn parse<T: serde::de::DeserializeOwned>(what: &str, json: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("Invalid timestamp {:?}: {}", timestamp, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn to_js_error(message: String) -> JsValue {
    log(&message);
    js_sys::Error::new(&message).into()
}

#[cfg(target_arch = "wasm32")]
fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn log(_message: &str) {}
