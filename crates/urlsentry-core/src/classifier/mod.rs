//! Binary classification of feature vectors.
//!
//! The contract is positional: a classifier receives the 14 features in
//! [`FEATURE_NAMES`](crate::features::FEATURE_NAMES) order and nothing else.

mod ensemble;

pub use ensemble::{ModelError, TreeEnsemble, DEFAULT_THRESHOLD};

use serde::Serialize;
use thiserror::Error;

use crate::features::FEATURE_COUNT;

/// Classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Benign = 0,
    Malicious = 1,
}

impl Label {
    pub fn from_malicious(malicious: bool) -> Self {
        if malicious {
            Label::Malicious
        } else {
            Label::Benign
        }
    }
}

/// Inference failure. With a validated model this means the model and the
/// feature vector disagree; it is a configuration defect, not bad input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error("classifier produced a non-finite score")]
    NonFiniteScore,
    #[error("classifier rejected input: {0}")]
    Rejected(String),
}

/// Loaded once, called many times, never mutated.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Label, ClassifierError>;
}
