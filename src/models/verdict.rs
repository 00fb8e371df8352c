use super::environmental::EnvironmentalReading;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disease {
    #[serde(rename = "Rice Blast")]
    RiceBlast,
    #[serde(rename = "Brown Spot")]
    BrownSpot,
    #[serde(rename = "Bacterial Wilt")]
    BacterialWilt,
    #[serde(rename = "Leaf Blight")]
    LeafBlight,
    Healthy,
}

impl Disease {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disease::RiceBlast => "Rice Blast",
            Disease::BrownSpot => "Brown Spot",
            Disease::BacterialWilt => "Bacterial Wilt",
            Disease::LeafBlight => "Leaf Blight",
            Disease::Healthy => "Healthy",
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered so that `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse verdict from the statistical classifier.
///
/// `Unknown` means no model is loaded; `Error` means the model was loaded but
/// this particular inference failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    Low,
    High,
    Unknown,
    Error,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::High => "High",
            RiskLabel::Unknown => "Unknown",
            RiskLabel::Error => "Error",
        }
    }

    pub fn from_prediction(disease_present: bool) -> Self {
        if disease_present {
            RiskLabel::High
        } else {
            RiskLabel::Low
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the expert-rule table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleVerdict {
    pub disease: Disease,
    pub risk: RiskLevel,
    pub confidence: f64,
}

impl RuleVerdict {
    pub const HEALTHY: RuleVerdict = RuleVerdict::new(Disease::Healthy, RiskLevel::Low, 0.95);

    pub const fn new(disease: Disease, risk: RiskLevel, confidence: f64) -> Self {
        Self {
            disease,
            risk,
            confidence,
        }
    }
}

/// Verdict returned to callers after the classifier has been consulted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalVerdict {
    pub disease: Disease,
    pub risk: RiskLevel,
    pub confidence: f64,
}

impl From<RuleVerdict> for FinalVerdict {
    fn from(rule: RuleVerdict) -> Self {
        Self {
            disease: rule.disease,
            risk: rule.risk,
            confidence: rule.confidence,
        }
    }
}

/// Full response for one prediction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub crop: String,
    pub symptoms: String,
    pub reading: EnvironmentalReading,
    pub prediction: Disease,
    pub risk: RiskLevel,
    pub confidence: f64,
    pub classifier: RiskLabel,
}

impl PredictionReport {
    pub fn new(
        crop: impl Into<String>,
        symptoms: impl Into<String>,
        reading: EnvironmentalReading,
        verdict: FinalVerdict,
        classifier: RiskLabel,
    ) -> Self {
        Self {
            crop: crop.into(),
            symptoms: symptoms.into(),
            reading,
            prediction: verdict.disease,
            risk: verdict.risk,
            confidence: verdict.confidence,
            classifier,
        }
    }

    pub fn verdict(&self) -> FinalVerdict {
        FinalVerdict {
            disease: self.prediction,
            risk: self.risk,
            confidence: self.confidence,
        }
    }
}
