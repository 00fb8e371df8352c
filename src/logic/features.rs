use crate::models::EnvironmentalReading;
use serde::{Deserialize, Serialize};

pub const FEATURE_COUNT: usize = 4;

/// Column order the classifier was trained on. Model artifacts must declare
/// exactly this list.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["temperature", "humidity", "rainfall", "soil_pH"];

/// Classifier input: `[temperature, humidity, rainfall, soil_pH]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn build(reading: &EnvironmentalReading) -> Self {
        Self([
            reading.temperature_c,
            reading.humidity_percent,
            reading.rainfall_mm,
            reading.soil_ph,
        ])
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl From<&EnvironmentalReading> for FeatureVector {
    fn from(reading: &EnvironmentalReading) -> Self {
        Self::build(reading)
    }
}
