pub mod classifier;
pub mod features;
pub mod merge;
pub mod predictor;
pub mod rules;

pub use classifier::RiskClassifier;
pub use features::FeatureVector;
pub use merge::merge;
pub use predictor::DiseasePredictor;
pub use rules::RulesEngine;
