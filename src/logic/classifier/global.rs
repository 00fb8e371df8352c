//! Process-wide risk classifier.
//!
//! `init` loads the model once and publishes it; every later caller reads the
//! same `Arc`. Loading happens under the write lock, so a concurrent
//! `current()` blocks until the load has either produced a model or been
//! recorded as unavailable.

use super::RiskClassifier;
use crate::config::ClassifierConfig;
use crate::logic::features::FeatureVector;
use crate::models::RiskLabel;
use parking_lot::RwLock;
use std::sync::Arc;

static CLASSIFIER: RwLock<Option<Arc<RiskClassifier>>> = RwLock::new(None);

/// Initialize the shared classifier from config. Subsequent calls return the
/// already-initialized instance without reloading.
pub fn init(config: &ClassifierConfig) -> Arc<RiskClassifier> {
    init_with(|| RiskClassifier::from_config(config))
}

/// Install the classifier produced by `load` unless one is already present.
pub fn init_with(load: impl FnOnce() -> RiskClassifier) -> Arc<RiskClassifier> {
    if let Some(existing) = CLASSIFIER.read().as_ref() {
        return Arc::clone(existing);
    }

    let mut slot = CLASSIFIER.write();
    if let Some(existing) = slot.as_ref() {
        return Arc::clone(existing);
    }

    let classifier = Arc::new(load());
    *slot = Some(Arc::clone(&classifier));
    classifier
}

pub fn current() -> Option<Arc<RiskClassifier>> {
    CLASSIFIER.read().clone()
}

/// Classify with the shared classifier, `Unknown` if it was never initialized.
pub fn classify(features: &FeatureVector) -> RiskLabel {
    match current() {
        Some(classifier) => classifier.classify(features),
        None => RiskLabel::Unknown,
    }
}

/// Drop the shared classifier. In-flight holders keep their `Arc` until done.
pub fn shutdown() -> Option<Arc<RiskClassifier>> {
    let previous = CLASSIFIER.write().take();
    if previous.is_some() {
        tracing::debug!("Risk classifier shut down");
    }
    previous
}
