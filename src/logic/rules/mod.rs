pub mod engine;
pub mod table;

pub use engine::RulesEngine;
pub use table::RULES;

use crate::models::{Crop, EnvironmentalReading, ReadingField, RuleVerdict};
use serde::Serialize;

/// Expert rule: fires when the symptom text contains `symptom` and the
/// reading's `field` is strictly above `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiseaseRule {
    pub id: &'static str,
    pub crop: Crop,
    pub symptom: &'static str,
    pub field: ReadingField,
    pub threshold: f64,
    pub verdict: RuleVerdict,
}

impl DiseaseRule {
    /// `symptoms` must already be lowercased.
    pub fn matches(&self, symptoms: &str, reading: &EnvironmentalReading) -> bool {
        symptoms.contains(self.symptom) && reading.get(self.field) > self.threshold
    }

    pub fn describe(&self) -> String {
        format!(
            "{}: \"{}\" and {} > {}{} -> {} ({} risk, {:.2})",
            self.crop,
            self.symptom,
            self.field,
            self.threshold,
            self.field.unit(),
            self.verdict.disease,
            self.verdict.risk,
            self.verdict.confidence
        )
    }
}

/// Entry of the rule listing: the rule data plus a readable description.
#[derive(Debug, Clone, Serialize)]
pub struct RuleListing {
    pub id: &'static str,
    pub description: String,
    pub rule: DiseaseRule,
}

impl From<&DiseaseRule> for RuleListing {
    fn from(rule: &DiseaseRule) -> Self {
        Self {
            id: rule.id,
            description: rule.describe(),
            rule: *rule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Disease, RiskLevel};

    const RULE: DiseaseRule = DiseaseRule {
        id: "test",
        crop: Crop::Rice,
        symptom: "yellow",
        field: ReadingField::Humidity,
        threshold: 70.0,
        verdict: RuleVerdict::new(Disease::RiceBlast, RiskLevel::High, 0.87),
    };

    #[test]
    fn requires_symptom_and_threshold() {
        let humid = EnvironmentalReading::new(25.0, 80.0, 0.0);
        let dry = EnvironmentalReading::new(25.0, 40.0, 0.0);
        assert!(RULE.matches("yellow leaves", &humid));
        assert!(!RULE.matches("yellow leaves", &dry));
        assert!(!RULE.matches("curling leaves", &humid));
    }

    #[test]
    fn threshold_is_strict() {
        let boundary = EnvironmentalReading::new(25.0, 70.0, 0.0);
        assert!(!RULE.matches("yellow", &boundary));
    }

    #[test]
    fn description_mentions_condition() {
        let text = RULE.describe();
        assert!(text.contains("yellow"));
        assert!(text.contains("humidity > 70%"));
        assert!(text.contains("Rice Blast"));
    }
}
