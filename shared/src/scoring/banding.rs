//! Threshold ladders shared by every calculator
//!
//! A ladder is an ordered slice of [`Band`]s. Only the first band that
//! matches a value awards points, so a ladder reads like an if/else-if chain.

/// A single rung of a threshold ladder
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Band {
    /// `value > threshold` awards `points`
    Above(f64, f64),
    /// `value < threshold` awards `points`
    Below(f64, f64),
    /// `low <= value <= high` awards `points`
    Within(f64, f64, f64),
}

impl Band {
    pub fn points_for(&self, value: f64) -> Option<f64> {
        match *self {
            Band::Above(threshold, points) if value > threshold => Some(points),
            Band::Below(threshold, points) if value < threshold => Some(points),
            Band::Within(low, high, points) if low <= value && value <= high => Some(points),
            _ => None,
        }
    }
}

/// Points of the first matching band, or 0 when nothing matches
pub fn banded_points(bands: &[Band], value: f64) -> f64 {
    bands
        .iter()
        .find_map(|band| band.points_for(value))
        .unwrap_or(0.0)
}

/// Same as [`banded_points`] for an optional reading; a missing reading scores 0
pub fn banded_points_opt(bands: &[Band], value: Option<f64>) -> f64 {
    value.map_or(0.0, |v| banded_points(bands, v))
}

/// Scale a per-period point tally onto 0-100
///
/// Computed as `tally / days * 10`, capped at 100. The result depends on the
/// length of the period: the same daily conditions over more days give the
/// same score, but a single hot day in a long period counts for less.
pub fn normalize(tally: f64, days: usize) -> f64 {
    (tally / days as f64 * 10.0).min(100.0)
}

/// Clamp a score into 0-100
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LADDER: &[Band] = &[Band::Above(80.0, 30.0), Band::Above(50.0, 20.0), Band::Above(30.0, 10.0)];

    #[test]
    fn first_matching_band_wins() {
        assert_eq!(banded_points(LADDER, 95.0), 30.0);
        assert_eq!(banded_points(LADDER, 60.0), 20.0);
        assert_eq!(banded_points(LADDER, 31.0), 10.0);
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(banded_points(LADDER, 80.0), 20.0);
        assert_eq!(banded_points(LADDER, 30.0), 0.0);
    }

    #[test]
    fn within_is_inclusive_on_both_ends() {
        let bands = [Band::Within(18.0, 28.0, 8.0), Band::Within(15.0, 30.0, 4.0)];
        assert_eq!(banded_points(&bands, 18.0), 8.0);
        assert_eq!(banded_points(&bands, 28.0), 8.0);
        assert_eq!(banded_points(&bands, 29.0), 4.0);
        assert_eq!(banded_points(&bands, 30.5), 0.0);
    }

    #[test]
    fn below_bands() {
        let bands = [Band::Below(20.0, 30.0), Band::Below(40.0, 20.0)];
        assert_eq!(banded_points(&bands, 10.0), 30.0);
        assert_eq!(banded_points(&bands, 20.0), 20.0);
        assert_eq!(banded_points(&bands, 40.0), 0.0);
    }

    #[test]
    fn missing_reading_scores_zero() {
        assert_eq!(banded_points_opt(LADDER, None), 0.0);
        assert_eq!(banded_points_opt(LADDER, Some(90.0)), 30.0);
    }

    #[test]
    fn normalize_caps_at_100() {
        assert_eq!(normalize(10.0, 1), 100.0);
        assert_eq!(normalize(50.0, 5), 100.0);
        assert_eq!(normalize(5.0, 10), 5.0);
    }

    #[test]
    fn normalize_depends_on_period_length() {
        // one qualifying day scores less the longer the period
        assert!(normalize(8.0, 30) < normalize(8.0, 10));
    }
}
