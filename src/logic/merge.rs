use crate::models::{FinalVerdict, RiskLabel, RiskLevel, RuleVerdict};

/// Combine the rule verdict with the classifier label.
///
/// Escalation only: a `High` label forces the risk to `High`; disease and
/// confidence always come from the rules. `Low`, `Unknown` and `Error` leave
/// the rule verdict as is.
pub fn merge(rule: RuleVerdict, classifier: RiskLabel) -> FinalVerdict {
    let mut verdict = FinalVerdict::from(rule);

    if classifier == RiskLabel::High {
        if rule.risk < RiskLevel::High {
            tracing::debug!(
                disease = %rule.disease,
                rule_risk = %rule.risk,
                "Classifier escalated risk to High"
            );
        }
        verdict.risk = RiskLevel::High;
    }

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Disease;

    const RICE_BLAST: RuleVerdict = RuleVerdict::new(Disease::RiceBlast, RiskLevel::High, 0.87);
    const BROWN_SPOT: RuleVerdict = RuleVerdict::new(Disease::BrownSpot, RiskLevel::Medium, 0.78);

    #[test]
    fn high_escalates_healthy() {
        let v = merge(RuleVerdict::HEALTHY, RiskLabel::High);
        assert_eq!(v.disease, Disease::Healthy);
        assert_eq!(v.risk, RiskLevel::High);
        assert_eq!(v.confidence, 0.95);
    }

    #[test]
    fn high_escalates_medium() {
        let v = merge(BROWN_SPOT, RiskLabel::High);
        assert_eq!(v.disease, Disease::BrownSpot);
        assert_eq!(v.risk, RiskLevel::High);
        assert_eq!(v.confidence, 0.78);
    }

    #[test]
    fn low_never_downgrades() {
        assert_eq!(merge(RICE_BLAST, RiskLabel::Low), FinalVerdict::from(RICE_BLAST));
        assert_eq!(merge(BROWN_SPOT, RiskLabel::Low), FinalVerdict::from(BROWN_SPOT));
    }

    #[test]
    fn degraded_labels_leave_rule_verdict() {
        for rule in [RuleVerdict::HEALTHY, RICE_BLAST, BROWN_SPOT] {
            for label in [RiskLabel::Unknown, RiskLabel::Error] {
                assert_eq!(merge(rule, label), FinalVerdict::from(rule));
            }
        }
    }
}
