use super::{table::RULES, DiseaseRule, RuleListing};
use crate::models::{Crop, EnvironmentalReading, RuleVerdict};

pub struct RulesEngine {
    rules: &'static [DiseaseRule],
}

impl RulesEngine {
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Evaluate the rule table for a free-text crop identifier.
    ///
    /// Unknown crops and unmatched symptoms both yield [`RuleVerdict::HEALTHY`].
    pub fn evaluate(
        &self,
        crop: &str,
        symptoms: &str,
        reading: &EnvironmentalReading,
    ) -> RuleVerdict {
        match Crop::from_str(crop) {
            Some(crop) => self.evaluate_crop(crop, symptoms, reading),
            None => {
                tracing::debug!("Crop '{}' not in rule table, defaulting to healthy", crop);
                RuleVerdict::HEALTHY
            }
        }
    }

    pub fn evaluate_crop(
        &self,
        crop: Crop,
        symptoms: &str,
        reading: &EnvironmentalReading,
    ) -> RuleVerdict {
        let symptoms = symptoms.to_lowercase();

        let matched = self.rules_for(crop).find(|rule| {
            let fired = rule.matches(&symptoms, reading);
            tracing::trace!(rule = rule.id, fired, "Evaluated rule");
            fired
        });

        match matched {
            Some(rule) => {
                tracing::debug!(rule = rule.id, disease = %rule.verdict.disease, "Rule matched");
                rule.verdict
            }
            None => RuleVerdict::HEALTHY,
        }
    }

    /// Rules for `crop` in evaluation order.
    pub fn rules_for(&self, crop: Crop) -> impl Iterator<Item = &DiseaseRule> {
        self.rules.iter().filter(move |r| r.crop == crop)
    }

    pub fn rules(&self) -> &[DiseaseRule] {
        self.rules
    }

    pub fn list_rules(&self) -> Vec<RuleListing> {
        self.rules.iter().map(RuleListing::from).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}
