//! Gradient-boosted tree ensemble loaded from a JSON tree dump.
//!
//! File layout:
//!
//! ```json
//! {
//!   "base_score": 0.5,
//!   "threshold": 0.5,
//!   "trees": [
//!     { "nodeid": 0, "split": "is_filter", "split_condition": 0.5,
//!       "yes": 1, "no": 2, "missing": 1,
//!       "children": [ { "nodeid": 1, "leaf": -1.2 }, { "nodeid": 2, "leaf": 1.4 } ] }
//!   ]
//! }
//! ```
//!
//! `split` is a feature name or `f<index>`. A split sends `x < split_condition`
//! to `yes`, otherwise to `no`, and NaN to `missing` (default `yes`).
//! Comparisons happen at single precision, as in the training library.
//! The malicious probability is `sigmoid(logit(base_score) + sum(leaves))`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::{Classifier, ClassifierError, Label};
use crate::features::{FEATURE_COUNT, FEATURE_NAMES};

pub const DEFAULT_THRESHOLD: f64 = 0.5;
const DEFAULT_BASE_SCORE: f64 = 0.5;

/// Model could not be loaded or failed validation. Fatal at startup.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("read model {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse model: {0}")]
    Json(#[from] serde_json::Error),
    #[error("model has no trees")]
    Empty,
    #[error("tree {tree} node {node}: unknown feature {split:?}")]
    UnknownFeature { tree: usize, node: u32, split: String },
    #[error("tree {tree} node {node}: child {child} is not among its children")]
    MissingChild { tree: usize, node: u32, child: u32 },
    #[error("tree {tree} node {node}: non-finite value")]
    NonFiniteValue { tree: usize, node: u32 },
    #[error("base_score {0} must be strictly between 0 and 1")]
    BaseScore(f64),
    #[error("threshold {0} must be within 0..=1")]
    Threshold(f64),
    #[error("probe prediction failed: {0}")]
    Probe(#[source] ClassifierError),
}

fn default_base_score() -> f64 {
    DEFAULT_BASE_SCORE
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

#[derive(Debug, Deserialize)]
struct ModelFile {
    #[serde(default = "default_base_score")]
    base_score: f64,
    #[serde(default = "default_threshold")]
    threshold: f64,
    trees: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNode {
    Split {
        nodeid: u32,
        split: String,
        split_condition: f64,
        yes: u32,
        no: u32,
        #[serde(default)]
        missing: Option<u32>,
        children: Vec<RawNode>,
    },
    Leaf {
        nodeid: u32,
        leaf: f64,
    },
}

impl RawNode {
    fn nodeid(&self) -> u32 {
        match self {
            RawNode::Split { nodeid, .. } | RawNode::Leaf { nodeid, .. } => *nodeid,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Node {
    Split {
        feature: usize,
        condition: f32,
        yes: usize,
        no: usize,
        missing: usize,
    },
    Leaf(f64),
}

/// Flattened tree. Root at index 0; children always sit at higher indices
/// than their parent, so a walk terminates.
#[derive(Debug, Clone)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn leaf_value(&self, x: &[f64; FEATURE_COUNT]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Leaf(value) => return value,
                Node::Split {
                    feature,
                    condition,
                    yes,
                    no,
                    missing,
                } => {
                    let v = x[feature];
                    idx = if v.is_nan() {
                        missing
                    } else if (v as f32) < condition {
                        yes
                    } else {
                        no
                    };
                }
            }
        }
    }
}

fn resolve_feature(split: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|n| *n == split).or_else(|| {
        split
            .strip_prefix('f')?
            .parse::<usize>()
            .ok()
            .filter(|i| *i < FEATURE_COUNT)
    })
}

fn compile(raw: &RawNode, tree: usize, nodes: &mut Vec<Node>) -> Result<usize, ModelError> {
    let idx = nodes.len();
    match raw {
        RawNode::Leaf { nodeid, leaf } => {
            if !leaf.is_finite() {
                return Err(ModelError::NonFiniteValue { tree, node: *nodeid });
            }
            nodes.push(Node::Leaf(*leaf));
        }
        RawNode::Split {
            nodeid,
            split,
            split_condition,
            yes,
            no,
            missing,
            children,
        } => {
            let node = *nodeid;
            let feature = resolve_feature(split).ok_or_else(|| ModelError::UnknownFeature {
                tree,
                node,
                split: split.clone(),
            })?;
            if !split_condition.is_finite() {
                return Err(ModelError::NonFiniteValue { tree, node });
            }
            // Placeholder until the children have indices.
            nodes.push(Node::Leaf(0.0));

            let mut at: HashMap<u32, usize> = HashMap::with_capacity(children.len());
            for child in children {
                let child_idx = compile(child, tree, nodes)?;
                at.insert(child.nodeid(), child_idx);
            }
            let find = |child: u32| {
                at.get(&child)
                    .copied()
                    .ok_or(ModelError::MissingChild { tree, node, child })
            };
            nodes[idx] = Node::Split {
                feature,
                condition: *split_condition as f32,
                yes: find(*yes)?,
                no: find(*no)?,
                missing: find(missing.unwrap_or(*yes))?,
            };
        }
    }
    Ok(idx)
}

/// Boosted tree ensemble over the 14-feature vector.
#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    trees: Vec<Tree>,
    base_margin: f64,
    threshold: f64,
}

impl TreeEnsemble {
    /// Loads and validates a model file, including a probe prediction.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let data = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json(&data)?;
        tracing::info!(
            path = %path.display(),
            trees = model.tree_count(),
            threshold = model.threshold,
            "loaded tree ensemble"
        );
        Ok(model)
    }

    pub fn from_json(data: &str) -> Result<Self, ModelError> {
        let file: ModelFile = serde_json::from_str(data)?;
        if file.trees.is_empty() {
            return Err(ModelError::Empty);
        }
        if !(file.base_score > 0.0 && file.base_score < 1.0) {
            return Err(ModelError::BaseScore(file.base_score));
        }

        let mut trees = Vec::with_capacity(file.trees.len());
        for (i, raw) in file.trees.iter().enumerate() {
            let mut nodes = Vec::new();
            compile(raw, i, &mut nodes)?;
            trees.push(Tree { nodes });
        }

        let model = Self {
            trees,
            base_margin: (file.base_score / (1.0 - file.base_score)).ln(),
            threshold: DEFAULT_THRESHOLD,
        }
        .with_threshold(file.threshold)?;

        model
            .predict(&[0.0; FEATURE_COUNT])
            .map_err(ModelError::Probe)?;
        Ok(model)
    }

    /// Replaces the decision threshold on the malicious probability.
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self, ModelError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ModelError::Threshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Probability that the vector is malicious.
    pub fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let margin = self.base_margin
            + self
                .trees
                .iter()
                .map(|t| t.leaf_value(features))
                .sum::<f64>();
        1.0 / (1.0 + (-margin).exp())
    }
}

impl Classifier for TreeEnsemble {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Label, ClassifierError> {
        let p = self.predict_proba(features);
        if p.is_nan() {
            return Err(ClassifierError::NonFiniteScore);
        }
        Ok(Label::from_malicious(p > self.threshold))
    }
}
