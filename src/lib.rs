//! Crop disease risk estimation.
//!
//! An expert rule table maps crop, symptoms and environmental conditions to a
//! disease verdict. An optional tree-ensemble classifier can escalate the
//! resulting risk level but never lowers it.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use error::{CropGuardError, Result};
pub use logic::classifier::{global, ClassifierStatus, RiskClassifier};
pub use logic::DiseasePredictor;
pub use models::{EnvironmentalReading, FinalVerdict, RawReading, RiskLabel, RiskLevel};

use std::sync::Arc;

/// Predict using the process-wide classifier set up by [`global::init`].
/// Falls back to rules alone when no classifier has been initialized.
pub fn predict(crop: &str, symptoms: &str, reading: &EnvironmentalReading) -> FinalVerdict {
    let classifier = global::current().unwrap_or_else(|| Arc::new(RiskClassifier::unavailable()));
    DiseasePredictor::new(classifier).predict(crop, symptoms, reading)
}
