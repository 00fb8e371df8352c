use super::classifier::RiskClassifier;
use super::features::FeatureVector;
use super::merge::merge;
use super::rules::RulesEngine;
use crate::models::{EnvironmentalReading, FinalVerdict, PredictionReport};
use std::sync::Arc;

/// Runs the rule table and the classifier for one request and merges them.
pub struct DiseasePredictor {
    rules: RulesEngine,
    classifier: Arc<RiskClassifier>,
}

impl DiseasePredictor {
    pub fn new(classifier: Arc<RiskClassifier>) -> Self {
        Self {
            rules: RulesEngine::new(),
            classifier,
        }
    }

    /// Rules only.
    pub fn rules_only() -> Self {
        Self::new(Arc::new(RiskClassifier::unavailable()))
    }

    pub fn classifier(&self) -> &RiskClassifier {
        &self.classifier
    }

    pub fn predict(&self, crop: &str, symptoms: &str, reading: &EnvironmentalReading) -> FinalVerdict {
        self.report(crop, symptoms, reading).verdict()
    }

    pub fn report(&self, crop: &str, symptoms: &str, reading: &EnvironmentalReading) -> PredictionReport {
        let features = FeatureVector::build(reading);
        let label = self.classifier.classify(&features);
        let rule = self.rules.evaluate(crop, symptoms, reading);
        let verdict = merge(rule, label);

        tracing::info!(
            crop,
            disease = %verdict.disease,
            risk = %verdict.risk,
            classifier = %label,
            "Prediction complete"
        );

        PredictionReport::new(crop, symptoms, *reading, verdict, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::classifier::tests::FixedModel;
    use crate::logic::classifier::InferenceError;
    use crate::models::{Disease, RiskLabel, RiskLevel};

    fn predictor(answer: Result<bool, InferenceError>) -> DiseasePredictor {
        DiseasePredictor::new(Arc::new(RiskClassifier::with_model(Arc::new(FixedModel(
            answer,
        )))))
    }

    #[test]
    fn tomato_wilt_without_classifier() {
        let predictor = DiseasePredictor::rules_only();
        let reading = EnvironmentalReading::new(32.0, 50.0, 1.0).with_soil_ph(6.5);
        let v = predictor.predict("Tomato", "Wilting leaves", &reading);
        assert_eq!(v.disease, Disease::BacterialWilt);
        assert_eq!(v.risk, RiskLevel::High);
        assert_eq!(v.confidence, 0.85);
    }

    #[test]
    fn classifier_escalates_healthy_rice() {
        let predictor = predictor(Ok(true));
        let reading = EnvironmentalReading::new(25.0, 80.0, 10.0);
        let report = predictor.report("Rice", "none", &reading);
        assert_eq!(report.prediction, Disease::Healthy);
        assert_eq!(report.risk, RiskLevel::High);
        assert_eq!(report.confidence, 0.95);
        assert_eq!(report.classifier, RiskLabel::High);
        assert_eq!(report.crop, "Rice");
        assert_eq!(report.reading, reading);
    }

    #[test]
    fn low_classifier_keeps_rice_blast() {
        let predictor = predictor(Ok(false));
        let reading = EnvironmentalReading::new(25.0, 80.0, 10.0);
        let v = predictor.predict("rice", "yellow leaves", &reading);
        assert_eq!(v.disease, Disease::RiceBlast);
        assert_eq!(v.risk, RiskLevel::High);
        assert_eq!(v.confidence, 0.87);
    }

    #[test]
    fn inference_error_still_returns_rule_verdict() {
        let predictor = predictor(Err(InferenceError::Other("session closed".into())));
        let reading = EnvironmentalReading::new(22.0, 70.0, 1.0);
        let report = predictor.report("corn", "spots", &reading);
        assert_eq!(report.classifier, RiskLabel::Error);
        assert_eq!(report.prediction, Disease::LeafBlight);
        assert_eq!(report.risk, RiskLevel::Medium);
        assert_eq!(predictor.classifier().status().faults, 1);
    }
}
