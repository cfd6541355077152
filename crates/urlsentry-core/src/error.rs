//! Per-request feature extraction errors.
//!
//! Every variant aborts vector construction; the detector reports them as an
//! indeterminate verdict. Model and configuration failures live in
//! [`crate::classifier::ModelError`] and are fatal at startup instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// URL structure (authority, port, query) could not be split.
    #[error("malformed URL {url:?}: {reason}")]
    MalformedInput { url: String, reason: String },
    /// Entropy of an empty URL is undefined.
    #[error("empty URL: entropy is undefined")]
    EmptyInput,
    /// The public-suffix collaborator could not process the host at all.
    #[error("suffix lookup failed for host {host:?}: {reason}")]
    SuffixLookup { host: String, reason: String },
}

impl ExtractError {
    pub(crate) fn malformed(url: &str, reason: impl Into<String>) -> Self {
        ExtractError::MalformedInput {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    /// Short stable name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::MalformedInput { .. } => "malformed_input",
            ExtractError::EmptyInput => "empty_input",
            ExtractError::SuffixLookup { .. } => "suffix_lookup",
        }
    }
}
