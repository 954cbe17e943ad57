//! Risk assessment service

use std::path::Path;

use chrono::{DateTime, Utc};
use shared::{assess_farm, FarmRiskInput, RiskAssessment};

use crate::error::AppResult;
use crate::input::read_json;

/// Runs the risk assessment engine over farm input documents
#[derive(Debug, Clone, Default)]
pub struct RiskAssessmentService;

impl RiskAssessmentService {
    pub fn new() -> Self {
        Self
    }

    /// Assess a parsed farm input, stamping the result with `now`
    pub fn assess(&self, input: &FarmRiskInput, now: DateTime<Utc>) -> AppResult<RiskAssessment> {
        tracing::info!(
            days = input.weather_data.len(),
            crops = input.crops.len(),
            "Running risk assessment"
        );

        let assessment = assess_farm(input, now)?;

        if let Some(overall) = &assessment.overall_risk {
            tracing::info!(
                disease = overall.disease,
                pest = overall.pest,
                climate = overall.climate,
                "Risk assessment complete"
            );
        }

        Ok(assessment)
    }

    /// Read a farm input document and assess it
    pub fn assess_file(&self, path: &Path, now: DateTime<Utc>) -> AppResult<RiskAssessment> {
        let input: FarmRiskInput = read_json(path)?;
        self.assess(&input, now)
    }
}
