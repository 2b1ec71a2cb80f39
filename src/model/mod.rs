//! Pre-trained random-forest classifier artifact and inference adapter.
//!
//! The artifact is a JSON export of the trained forest: an ordered feature
//! schema plus one flattened node-array record per tree (left/right child,
//! split feature, threshold, per-class leaf weights). The adapter depends
//! only on the predict / predict-probability surface; loading and structural
//! validation happen once, after which the model is immutable and safely
//! shared by reference across threads.

use crate::{AipidError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Sentinel child index marking a leaf node.
const LEAF: i32 = -1;

/// Outcome of one prediction: binary label and the probability mass the
/// forest assigns to that label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// 0 = non-anti-inflammatory, 1 = anti-inflammatory.
    pub label: u8,
    /// Probability of the predicted label, in [0.5, 1] for a binary forest.
    pub confidence: f64,
}

impl Prediction {
    pub fn is_aip(&self) -> bool {
        self.label == 1
    }
}

/// One decision tree as parallel node arrays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i32>,
    pub children_right: Vec<i32>,
    pub feature: Vec<i32>,
    pub threshold: Vec<f64>,
    /// Per-node class sample weights `[w_class0, w_class1]`.
    pub value: Vec<[f64; 2]>,
}

impl DecisionTree {
    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn validate(&self, tree_idx: usize, n_features: usize) -> Result<()> {
        let n = self.node_count();
        let malformed = |what: &str| {
            AipidError::Model(format!("tree {}: {}", tree_idx, what))
        };

        if n == 0 {
            return Err(malformed("empty node arrays"));
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(malformed("node arrays have inconsistent lengths"));
        }
        for node in 0..n {
            let left = self.children_left[node];
            let right = self.children_right[node];
            if (left == LEAF) != (right == LEAF) {
                return Err(malformed(&format!("node {}: half-leaf", node)));
            }
            if left != LEAF {
                for child in [left, right] {
                    if child < 0 || child as usize >= n {
                        return Err(malformed(&format!(
                            "node {}: child {} out of range",
                            node, child
                        )));
                    }
                }
                let feat = self.feature[node];
                if feat < 0 || feat as usize >= n_features {
                    return Err(malformed(&format!(
                        "node {}: split feature {} outside schema of {}",
                        node, feat, n_features
                    )));
                }
                if !self.threshold[node].is_finite() {
                    return Err(malformed(&format!("node {}: non-finite threshold", node)));
                }
            }
        }
        Ok(())
    }

    /// Walk from the root to a leaf and return the leaf's normalized class
    /// distribution.
    fn class_distribution(&self, row: &[f64]) -> Result<[f64; 2]> {
        let mut node = 0usize;
        // Bounded by node count; validated trees cannot cycle longer than that.
        for _ in 0..self.node_count() {
            if self.children_left[node] == LEAF {
                let [w0, w1] = self.value[node];
                let total = w0 + w1;
                if total <= 0.0 || !total.is_finite() {
                    return Err(AipidError::Inference(format!(
                        "leaf node {} has invalid class weights [{}, {}]",
                        node, w0, w1
                    )));
                }
                return Ok([w0 / total, w1 / total]);
            }
            let feat = self.feature[node] as usize;
            node = if row[feat] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        Err(AipidError::Inference(
            "tree walk did not reach a leaf".to_string(),
        ))
    }
}

/// A loaded random-forest classifier plus its declared feature schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestModel {
    feature_names: Vec<String>,
    trees: Vec<DecisionTree>,
}

impl ForestModel {
    /// Deserialize and structurally validate a model artifact.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let model: ForestModel = serde_json::from_reader(reader)?;
        model.validate()?;
        Ok(model)
    }

    /// Load a model artifact from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AipidError::Model(format!("cannot open model file {}: {}", path.display(), e))
        })?;
        let model = Self::from_reader(BufReader::new(file))?;
        debug!(
            features = model.feature_names.len(),
            trees = model.trees.len(),
            "loaded model from {}",
            path.display()
        );
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.feature_names.is_empty() {
            return Err(AipidError::Model("empty feature schema".to_string()));
        }
        if self.trees.is_empty() {
            return Err(AipidError::Model("forest has no trees".to_string()));
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate(idx, self.feature_names.len())?;
        }
        Ok(())
    }

    /// Ordered feature names the classifier expects, defining both the
    /// presence set and the column order of prediction rows.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Class probabilities `[p0, p1]` for one reconciled feature row:
    /// the mean of the per-tree leaf distributions.
    pub fn predict_proba(&self, row: &[f64]) -> Result<[f64; 2]> {
        if row.len() != self.feature_names.len() {
            return Err(AipidError::Inference(format!(
                "feature row has {} values, model expects {}",
                row.len(),
                self.feature_names.len()
            )));
        }
        if let Some(pos) = row.iter().position(|v| !v.is_finite()) {
            return Err(AipidError::Inference(format!(
                "non-finite value for feature '{}'",
                self.feature_names[pos]
            )));
        }

        let mut sums = [0.0f64; 2];
        for tree in &self.trees {
            let dist = tree.class_distribution(row)?;
            sums[0] += dist[0];
            sums[1] += dist[1];
        }
        let n = self.trees.len() as f64;
        Ok([sums[0] / n, sums[1] / n])
    }

    /// Predicted label and its probability mass. Ties favour class 0,
    /// matching argmax over the class axis.
    pub fn predict(&self, row: &[f64]) -> Result<Prediction> {
        let [p0, p1] = self.predict_proba(row)?;
        if p1 > p0 {
            Ok(Prediction {
                label: 1,
                confidence: p1,
            })
        } else {
            Ok(Prediction {
                label: 0,
                confidence: p0,
            })
        }
    }
}
