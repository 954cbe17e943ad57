//! Weather observation models

use serde::{Deserialize, Serialize};

/// One day of observed weather at the farm
///
/// All three readings are required; a record missing any of them is
/// rejected when the input document is parsed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    /// Mean air temperature in °C
    pub temperature: f64,
    /// Relative humidity, 0-100 %
    pub humidity: f64,
    /// Daily rainfall in mm
    pub rainfall: f64,
}

impl WeatherObservation {
    pub fn new(temperature: f64, humidity: f64, rainfall: f64) -> Self {
        Self {
            temperature,
            humidity,
            rainfall,
        }
    }
}
