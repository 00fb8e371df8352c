pub mod forest;
pub mod global;

pub use forest::ForestModel;

use crate::config::ClassifierConfig;
use crate::logic::features::FeatureVector;
use crate::models::RiskLabel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("non-finite feature values {0:?}")]
    NonFiniteInput([f64; 4]),

    #[error("malformed model: {0}")]
    Malformed(&'static str),

    /// Failure reported by a [`RiskModel`] implementation other than
    /// [`ForestModel`], such as a model served out of process.
    #[error("{0}")]
    Other(String),
}

/// Trained binary classifier over a [`FeatureVector`].
///
/// `predict` returns `true` when the model expects disease to be present.
pub trait RiskModel: Send + Sync {
    fn name(&self) -> &str;

    fn predict(&self, features: &FeatureVector) -> Result<bool, InferenceError>;

    /// Number of estimators, for status reporting.
    fn size(&self) -> usize {
        1
    }
}

/// Snapshot of classifier health, used for status output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierStatus {
    pub available: bool,
    pub model: String,
    pub model_path: Option<PathBuf>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub estimators: usize,
    pub inferences: u64,
    pub faults: u64,
}

struct LoadedModel {
    model: Arc<dyn RiskModel>,
    loaded_at: DateTime<Utc>,
}

/// Wraps an optional trained model and maps its output to a [`RiskLabel`].
///
/// The model is fixed at construction. An unavailable classifier answers
/// `Unknown` for every call; it is never re-probed.
pub struct RiskClassifier {
    loaded: Option<LoadedModel>,
    model_path: Option<PathBuf>,
    inferences: AtomicU64,
    faults: AtomicU64,
}

impl RiskClassifier {
    pub fn unavailable() -> Self {
        Self::build(None, None)
    }

    pub fn with_model(model: Arc<dyn RiskModel>) -> Self {
        Self::build(
            Some(LoadedModel {
                model,
                loaded_at: Utc::now(),
            }),
            None,
        )
    }

    fn build(loaded: Option<LoadedModel>, model_path: Option<PathBuf>) -> Self {
        Self {
            loaded,
            model_path,
            inferences: AtomicU64::new(0),
            faults: AtomicU64::new(0),
        }
    }

    /// Load a forest artifact. Failure is logged and yields an unavailable
    /// classifier rather than an error.
    pub fn load(path: &Path) -> Self {
        tracing::info!("Loading risk model from {:?}", path);
        match ForestModel::load(path) {
            Ok(model) => {
                tracing::info!("Risk model loaded ({} trees)", model.tree_count());
                Self::build(
                    Some(LoadedModel {
                        model: Arc::new(model),
                        loaded_at: Utc::now(),
                    }),
                    Some(path.to_path_buf()),
                )
            }
            Err(e) => {
                tracing::warn!("Risk model unavailable, using rules only: {}", e);
                // Status still reports the path that failed
                Self::build(None, Some(path.to_path_buf()))
            }
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        match config.effective_model_path() {
            Some(path) => Self::load(path),
            None => {
                tracing::info!("No risk model configured, using rules only");
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn classify(&self, features: &FeatureVector) -> RiskLabel {
        let Some(loaded) = &self.loaded else {
            return RiskLabel::Unknown;
        };

        self.inferences.fetch_add(1, Ordering::Relaxed);
        match loaded.model.predict(features) {
            Ok(present) => RiskLabel::from_prediction(present),
            Err(e) => {
                self.faults.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(model = loaded.model.name(), "Risk model inference failed: {}", e);
                RiskLabel::Error
            }
        }
    }

    pub fn status(&self) -> ClassifierStatus {
        ClassifierStatus {
            available: self.is_available(),
            model: self
                .loaded
                .as_ref()
                .map(|l| l.model.name().to_string())
                .unwrap_or_else(|| "None".to_string()),
            model_path: self.model_path.clone(),
            loaded_at: self.loaded.as_ref().map(|l| l.loaded_at),
            estimators: self.loaded.as_ref().map(|l| l.model.size()).unwrap_or(0),
            inferences: self.inferences.load(Ordering::Relaxed),
            faults: self.faults.load(Ordering::Relaxed),
        }
    }
}

impl std::fmt::Debug for RiskClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskClassifier")
            .field("available", &self.is_available())
            .field("inferences", &self.inferences.load(Ordering::Relaxed))
            .field("faults", &self.faults.load(Ordering::Relaxed))
            .finish()
    }
}
