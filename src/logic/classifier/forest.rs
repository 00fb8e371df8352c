//! Tree-ensemble risk model loaded from a JSON artifact.
//!
//! Artifact layout:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "features": ["temperature", "humidity", "rainfall", "soil_pH"],
//!   "trees": [
//!     { "nodes": [
//!         { "split": { "feature": 1, "threshold": 72.5, "left": 1, "right": 2 } },
//!         { "leaf": { "proba": [0.9, 0.1] } },
//!         { "leaf": { "proba": [0.2, 0.8] } }
//!     ] }
//!   ]
//! }
//! ```
//!
//! Node 0 is the root. Samples go left when `x <= threshold`. Class
//! probabilities are averaged across trees; class 1 (disease present) wins only
//! on a strict majority of probability mass.

use super::{InferenceError, RiskModel};
use crate::error::{CropGuardError, Result};
use crate::logic::features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestArtifact {
    pub format_version: u32,
    pub features: Vec<String>,
    pub trees: Vec<Tree>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        proba: [f64; 2],
    },
}

#[derive(Debug, Clone)]
pub struct ForestModel {
    trees: Vec<Tree>,
}

impl ForestModel {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CropGuardError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content).map_err(|e| CropGuardError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ForestArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ForestArtifact) -> Result<Self> {
        validate_artifact(&artifact)?;
        Ok(Self {
            trees: artifact.trees,
        })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Mean `[p(no disease), p(disease)]` across all trees.
    pub fn predict_proba(&self, features: &FeatureVector) -> std::result::Result<[f64; 2], InferenceError> {
        if !features.is_finite() {
            return Err(InferenceError::NonFiniteInput(*features.values()));
        }

        let mut sum = [0.0, 0.0];
        for tree in &self.trees {
            let proba = tree.leaf_proba(features)?;
            sum[0] += proba[0];
            sum[1] += proba[1];
        }

        let n = self.trees.len() as f64;
        Ok([sum[0] / n, sum[1] / n])
    }
}

impl RiskModel for ForestModel {
    fn name(&self) -> &str {
        "forest"
    }

    fn predict(&self, features: &FeatureVector) -> std::result::Result<bool, InferenceError> {
        let [absent, present] = self.predict_proba(features)?;
        Ok(present > absent)
    }

    fn size(&self) -> usize {
        self.tree_count()
    }
}

impl Tree {
    fn leaf_proba(&self, features: &FeatureVector) -> std::result::Result<[f64; 2], InferenceError> {
        let mut index = 0;
        // Children always point forward, so this terminates within nodes.len() steps
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(Node::Leaf { proba }) => return Ok(*proba),
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features
                        .get(*feature)
                        .ok_or(InferenceError::Malformed("feature index out of range"))?;
                    index = if value <= *threshold { *left } else { *right };
                }
                None => return Err(InferenceError::Malformed("node index out of range")),
            }
        }
        Err(InferenceError::Malformed("tree traversal did not reach a leaf"))
    }
}

fn validate_artifact(artifact: &ForestArtifact) -> Result<()> {
    if artifact.format_version != FORMAT_VERSION {
        return Err(CropGuardError::InvalidData(format!(
            "unsupported model format version {} (expected {})",
            artifact.format_version, FORMAT_VERSION
        )));
    }

    if artifact.features != FEATURE_NAMES {
        return Err(CropGuardError::InvalidData(format!(
            "model feature order {:?} does not match expected {:?}",
            artifact.features, FEATURE_NAMES
        )));
    }

    if artifact.trees.is_empty() {
        return Err(CropGuardError::InvalidData("model has no trees".into()));
    }

    for (t, tree) in artifact.trees.iter().enumerate() {
        if tree.nodes.is_empty() {
            return Err(CropGuardError::InvalidData(format!("tree {} has no nodes", t)));
        }

        for (i, node) in tree.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(CropGuardError::InvalidData(format!(
                            "tree {} node {} splits on unknown feature {}",
                            t, i, feature
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(CropGuardError::InvalidData(format!(
                            "tree {} node {} has a non-finite threshold",
                            t, i
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= tree.nodes.len() {
                            return Err(CropGuardError::InvalidData(format!(
                                "tree {} node {} has invalid child {}",
                                t, i, child
                            )));
                        }
                    }
                }
                Node::Leaf { proba } => {
                    if proba.iter().any(|p| !p.is_finite() || *p < 0.0) {
                        return Err(CropGuardError::InvalidData(format!(
                            "tree {} node {} has invalid class probabilities",
                            t, i
                        )));
                    }
                }
            }
        }
    }

    Ok(())
}
