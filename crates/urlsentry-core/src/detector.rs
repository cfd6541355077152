//! Request boundary: URL in, three-state verdict out.

use std::fmt;
use std::path::Path;

use crate::classifier::{Classifier, ClassifierError, Label, ModelError, TreeEnsemble};
use crate::error::ExtractError;
use crate::features::{self, FeatureVector};
use crate::suffix::{PslLookup, SuffixLookup};

/// Outcome of classifying one URL.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Malicious,
    Benign,
    /// Features could not be extracted; no prediction was made.
    Indeterminate(ExtractError),
}

impl Verdict {
    pub fn is_decided(&self) -> bool {
        !matches!(self, Verdict::Indeterminate(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Malicious => "malicious",
            Verdict::Benign => "benign",
            Verdict::Indeterminate(_) => "indeterminate",
        }
    }
}

impl From<Label> for Verdict {
    fn from(label: Label) -> Self {
        match label {
            Label::Malicious => Verdict::Malicious,
            Label::Benign => Verdict::Benign,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Indeterminate(e) => write!(f, "indeterminate: {e}"),
            v => f.write_str(v.as_str()),
        }
    }
}

/// Feature extraction plus inference. Immutable after construction, so one
/// instance can serve concurrent callers.
pub struct Detector {
    lookup: Box<dyn SuffixLookup>,
    classifier: Box<dyn Classifier>,
}

impl Detector {
    pub fn new(
        lookup: impl SuffixLookup + 'static,
        classifier: impl Classifier + 'static,
    ) -> Self {
        Self {
            lookup: Box::new(lookup),
            classifier: Box::new(classifier),
        }
    }

    /// Detector over the Public Suffix List and a tree ensemble loaded from
    /// `model_path`. `threshold` overrides the model's own threshold.
    pub fn load(model_path: &Path, threshold: Option<f64>) -> Result<Self, ModelError> {
        let mut model = TreeEnsemble::load(model_path)?;
        if let Some(t) = threshold {
            model = model.with_threshold(t)?;
        }
        Ok(Self::new(PslLookup::new(), model))
    }

    pub fn features(&self, url: &str) -> Result<FeatureVector, ExtractError> {
        features::extract(url, self.lookup.as_ref())
    }

    /// Classifies `url`.
    ///
    /// Extraction failures are per-request and become
    /// [`Verdict::Indeterminate`]. Classifier failures are returned as errors:
    /// they mean the model does not fit the feature vector.
    pub fn classify(&self, url: &str) -> Result<Verdict, ClassifierError> {
        let vector = match self.features(url) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(kind = e.kind(), error = %e, "feature extraction failed");
                return Ok(Verdict::Indeterminate(e));
            }
        };

        match self.classifier.predict(&vector.as_array()) {
            Ok(label) => {
                tracing::debug!(?label, "classified url");
                Ok(label.into())
            }
            Err(e) => {
                tracing::error!(error = %e, "classifier failed on a well-formed vector");
                Err(e)
            }
        }
    }
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detector").finish_non_exhaustive()
    }
}
