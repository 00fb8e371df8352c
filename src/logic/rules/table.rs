use super::DiseaseRule;
use crate::models::{Crop, Disease, ReadingField, RiskLevel, RuleVerdict};

/// Authoritative rule table. Within a crop, rules are tried in this order
/// and the first match wins.
pub const RULES: &[DiseaseRule] = &[
    DiseaseRule {
        id: "rice_blast",
        crop: Crop::Rice,
        symptom: "yellow",
        field: ReadingField::Humidity,
        threshold: 70.0,
        verdict: RuleVerdict::new(Disease::RiceBlast, RiskLevel::High, 0.87),
    },
    DiseaseRule {
        id: "brown_spot",
        crop: Crop::Rice,
        symptom: "brown",
        field: ReadingField::Rainfall,
        threshold: 5.0,
        verdict: RuleVerdict::new(Disease::BrownSpot, RiskLevel::Medium, 0.78),
    },
    DiseaseRule {
        id: "bacterial_wilt",
        crop: Crop::Tomato,
        symptom: "wilting",
        field: ReadingField::Temperature,
        threshold: 30.0,
        verdict: RuleVerdict::new(Disease::BacterialWilt, RiskLevel::High, 0.85),
    },
    DiseaseRule {
        id: "leaf_blight",
        crop: Crop::Maize,
        symptom: "spots",
        field: ReadingField::Humidity,
        threshold: 65.0,
        verdict: RuleVerdict::new(Disease::LeafBlight, RiskLevel::Medium, 0.75),
    },
];
