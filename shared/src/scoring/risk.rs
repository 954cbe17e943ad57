//! Weather-driven risk calculators
//!
//! Each calculator tallies points per day from threshold ladders, scales the
//! tallies onto 0-100 with [`normalize`], applies crop-specific multipliers
//! and combines the sub-scores. Multipliers are applied to the normalized
//! values; the combination uses those values before they are clamped for
//! reporting.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::banding::{banded_points, clamp_score, normalize, Band};
use super::soil::assess_soil_health;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ClimateFactors, ClimateStress, CropRiskProfile, DiseaseFactors, DiseaseRisk, FarmRiskInput,
    OverallRisk, PestFactors, PestRisk, RiskAssessment, WeatherObservation,
};

const DISEASE_HUMIDITY: &[Band] = &[Band::Above(80.0, 10.0), Band::Above(70.0, 5.0)];
const DISEASE_TEMPERATURE: &[Band] = &[Band::Within(18.0, 28.0, 8.0), Band::Within(15.0, 30.0, 4.0)];
const DISEASE_RAINFALL: &[Band] = &[Band::Above(10.0, 12.0), Band::Above(5.0, 6.0)];

const PEST_TEMPERATURE: &[Band] = &[
    Band::Above(30.0, 12.0),
    Band::Above(25.0, 8.0),
    Band::Above(20.0, 4.0),
];
const PEST_HUMIDITY: &[Band] = &[Band::Within(60.0, 80.0, 10.0), Band::Within(50.0, 90.0, 5.0)];

const HEAT: &[Band] = &[Band::Above(35.0, 15.0), Band::Above(32.0, 8.0), Band::Above(30.0, 4.0)];
const DRY_DAY: &[Band] = &[Band::Below(2.0, 5.0)];
const FLOOD: &[Band] = &[Band::Above(50.0, 20.0), Band::Above(30.0, 12.0), Band::Above(20.0, 6.0)];

/// A hot, rainless day scores the top drought band regardless of [`DRY_DAY`]
const HOT_DRY_DAY_POINTS: f64 = 10.0;

/// Crops with their own sensitivity multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CropKind {
    Cotton,
    Chickpea,
    Other,
}

impl CropKind {
    fn of(crop_type: &str) -> Self {
        if crop_type.eq_ignore_ascii_case("cotton") {
            CropKind::Cotton
        } else if crop_type.eq_ignore_ascii_case("chickpea") {
            CropKind::Chickpea
        } else {
            CropKind::Other
        }
    }
}

fn ensure_observations(weather: &[WeatherObservation]) -> EngineResult<usize> {
    if weather.is_empty() {
        return Err(EngineError::InvalidInput(
            "weather series is empty; at least one daily observation is required".to_string(),
        ));
    }
    Ok(weather.len())
}

/// Disease pressure from humid, mild and wet days
pub fn calculate_disease_risk(
    weather: &[WeatherObservation],
    crop_type: &str,
) -> EngineResult<DiseaseRisk> {
    let days = ensure_observations(weather)?;

    let (mut humidity, mut temperature, mut rainfall) = (0.0, 0.0, 0.0);
    for day in weather {
        humidity += banded_points(DISEASE_HUMIDITY, day.humidity);
        temperature += banded_points(DISEASE_TEMPERATURE, day.temperature);
        rainfall += banded_points(DISEASE_RAINFALL, day.rainfall);
    }

    let mut humidity = normalize(humidity, days);
    let temperature = normalize(temperature, days);
    let mut rainfall = normalize(rainfall, days);

    match CropKind::of(crop_type) {
        CropKind::Cotton => humidity *= 1.2,
        CropKind::Chickpea => rainfall *= 1.3,
        CropKind::Other => {}
    }

    let overall = (humidity * 0.4) + (temperature * 0.3) + (rainfall * 0.3);

    Ok(DiseaseRisk {
        overall: clamp_score(overall),
        factors: DiseaseFactors {
            humidity: clamp_score(humidity),
            temperature: clamp_score(temperature),
            rainfall: clamp_score(rainfall),
        },
    })
}

/// Pest pressure from warm days with moderate humidity
pub fn calculate_pest_risk(
    weather: &[WeatherObservation],
    crop_type: &str,
) -> EngineResult<PestRisk> {
    let days = ensure_observations(weather)?;

    let (mut temperature, mut humidity) = (0.0, 0.0);
    for day in weather {
        temperature += banded_points(PEST_TEMPERATURE, day.temperature);
        humidity += banded_points(PEST_HUMIDITY, day.humidity);
    }

    let mut temperature = normalize(temperature, days);
    let mut humidity = normalize(humidity, days);

    match CropKind::of(crop_type) {
        CropKind::Cotton => temperature *= 1.3,
        CropKind::Chickpea => humidity *= 1.1,
        CropKind::Other => {}
    }

    let overall = (temperature * 0.6) + (humidity * 0.4);

    Ok(PestRisk {
        overall: clamp_score(overall),
        factors: PestFactors {
            temperature: clamp_score(temperature),
            humidity: clamp_score(humidity),
        },
    })
}

/// Heat, drought and flood stress; the worst of the three sets the overall score
pub fn calculate_climate_stress(
    weather: &[WeatherObservation],
    crop_type: &str,
) -> EngineResult<ClimateStress> {
    let days = ensure_observations(weather)?;

    let (mut heat, mut drought, mut flood) = (0.0, 0.0, 0.0);
    for day in weather {
        heat += banded_points(HEAT, day.temperature);
        drought += if day.rainfall < 1.0 && day.temperature > 30.0 {
            HOT_DRY_DAY_POINTS
        } else {
            banded_points(DRY_DAY, day.rainfall)
        };
        flood += banded_points(FLOOD, day.rainfall);
    }

    let mut heat = normalize(heat, days);
    let mut drought = normalize(drought, days);
    let mut flood = normalize(flood, days);

    match CropKind::of(crop_type) {
        CropKind::Cotton => {
            drought *= 0.8;
            flood *= 1.2;
        }
        CropKind::Chickpea => heat *= 1.3,
        CropKind::Other => {}
    }

    let overall = heat.max(drought).max(flood);

    Ok(ClimateStress {
        overall: clamp_score(overall),
        factors: ClimateFactors {
            heat: clamp_score(heat),
            drought: clamp_score(drought),
            flood: clamp_score(flood),
        },
    })
}

/// Disease, pest and climate profile of one crop
pub fn assess_crop(weather: &[WeatherObservation], crop_type: &str) -> EngineResult<CropRiskProfile> {
    let profile = CropRiskProfile {
        disease: Some(calculate_disease_risk(weather, crop_type)?),
        pest: Some(calculate_pest_risk(weather, crop_type)?),
        climate: Some(calculate_climate_stress(weather, crop_type)?),
    };

    debug!(
        crop = crop_type,
        disease = profile.disease.as_ref().map(|r| r.overall),
        pest = profile.pest.as_ref().map(|r| r.overall),
        climate = profile.climate.as_ref().map(|r| r.overall),
        "assessed crop"
    );

    Ok(profile)
}

/// Full risk assessment of a farm
///
/// `timestamp` is stamped onto the result as-is so identical inputs give
/// identical output.
pub fn assess_farm(input: &FarmRiskInput, timestamp: DateTime<Utc>) -> EngineResult<RiskAssessment> {
    let mut crop_risks = BTreeMap::new();
    for crop in &input.crops {
        let profile = assess_crop(&input.weather_data, &crop.crop_type)?;
        crop_risks.insert(crop.crop_type.clone(), profile);
    }

    let soil_health = assess_soil_health(&input.soil_data);
    let overall_risk = summarize(&crop_risks)?;

    debug!(
        crops = crop_risks.len(),
        days = input.weather_data.len(),
        soil = soil_health.overall,
        "assessed farm"
    );

    Ok(RiskAssessment {
        crop_risks,
        soil_health: Some(soil_health),
        timestamp: Some(timestamp),
        overall_risk: Some(overall_risk),
    })
}

/// Highest disease, pest and climate score over all crops
pub fn summarize(crop_risks: &BTreeMap<String, CropRiskProfile>) -> EngineResult<OverallRisk> {
    if crop_risks.is_empty() {
        return Err(EngineError::NoCropsAssessed);
    }

    let worst = |score: fn(&CropRiskProfile) -> Option<f64>| {
        crop_risks
            .values()
            .filter_map(score)
            .fold(0.0_f64, f64::max)
    };

    Ok(OverallRisk {
        disease: worst(|p| p.disease.as_ref().map(|r| r.overall)),
        pest: worst(|p| p.pest.as_ref().map(|r| r.overall)),
        climate: worst(|p| p.climate.as_ref().map(|r| r.overall)),
    })
}
