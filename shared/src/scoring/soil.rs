//! Soil health scoring

use super::banding::{banded_points_opt, clamp_score, Band};
use crate::models::{SoilFactors, SoilHealthProfile, SoilSample};

const NITROGEN: &[Band] = &[Band::Above(80.0, 30.0), Band::Above(50.0, 20.0), Band::Above(30.0, 10.0)];
const PHOSPHORUS: &[Band] = &[Band::Above(70.0, 25.0), Band::Above(40.0, 15.0), Band::Above(20.0, 8.0)];
const POTASSIUM: &[Band] = &[Band::Above(75.0, 25.0), Band::Above(45.0, 15.0), Band::Above(25.0, 8.0)];

const ORGANIC_MATTER: &[Band] = &[Band::Above(3.0, 35.0), Band::Above(2.0, 25.0), Band::Above(1.0, 15.0)];
const COMPACTION: &[Band] = &[Band::Below(20.0, 30.0), Band::Below(40.0, 20.0), Band::Below(60.0, 10.0)];

const MICROBIAL_ACTIVITY: &[Band] = &[Band::Above(70.0, 40.0), Band::Above(50.0, 30.0), Band::Above(30.0, 20.0)];
const EARTHWORMS: &[Band] = &[Band::Above(60.0, 30.0), Band::Above(40.0, 20.0), Band::Above(20.0, 10.0)];

/// Score nutrients, structure and biology of a soil sample
///
/// Missing groups or readings add nothing. The overall score is a weighted
/// average of the three clamped sub-scores, so it stays within 0-100
/// without a clamp of its own.
pub fn assess_soil_health(soil: &SoilSample) -> SoilHealthProfile {
    let nutrients = soil.nutrients.as_ref().map_or(0.0, |n| {
        banded_points_opt(NITROGEN, n.nitrogen)
            + banded_points_opt(PHOSPHORUS, n.phosphorus)
            + banded_points_opt(POTASSIUM, n.potassium)
    });

    let structure = soil.structure.as_ref().map_or(0.0, |s| {
        banded_points_opt(ORGANIC_MATTER, s.organic_matter) + banded_points_opt(COMPACTION, s.compaction)
    });

    let biology = soil.biology.as_ref().map_or(0.0, |b| {
        banded_points_opt(MICROBIAL_ACTIVITY, b.microbial_activity)
            + banded_points_opt(EARTHWORMS, b.earthworms)
    });

    let factors = SoilFactors {
        nutrients: clamp_score(nutrients),
        structure: clamp_score(structure),
        biology: clamp_score(biology),
    };

    let overall = (factors.nutrients * 0.3) + (factors.structure * 0.3) + (factors.biology * 0.4);
    debug_assert!(overall <= 100.0 + 1e-9, "soil health overall exceeded 100: {overall}");

    SoilHealthProfile { overall, factors }
}
