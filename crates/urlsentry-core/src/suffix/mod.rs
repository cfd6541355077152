//! Public-suffix decomposition of a URL's host.
//!
//! The feature pipeline only sees the [`SuffixLookup`] trait so it can be
//! driven by the real list ([`PslLookup`]) or by a fixed table in tests
//! ([`StaticSuffixLookup`]).

mod list;

pub use list::PslLookup;

use std::collections::HashMap;

use serde::Serialize;

use crate::error::ExtractError;
use crate::url_model::lenient_host;

/// Host split into subdomain, registrable label and public suffix.
///
/// For `mail.google.com`: `("mail", "google", "com")`. Labels keep the case
/// they had in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainParts {
    pub subdomain: String,
    pub domain: String,
    pub suffix: String,
    /// The matched suffix comes from the private section of the list
    /// (e.g. `github.io`).
    pub is_private: bool,
}

impl DomainParts {
    /// Number of dot-separated subdomain labels; 0 when there is no subdomain.
    pub fn subdomain_count(&self) -> usize {
        if self.subdomain.is_empty() {
            0
        } else {
            self.subdomain.matches('.').count() + 1
        }
    }
}

/// Decomposes the host of a raw URL (scheme optional).
pub trait SuffixLookup: Send + Sync {
    fn lookup(&self, url: &str) -> Result<DomainParts, ExtractError>;
}

/// Fixed host table. Unknown hosts decompose to empty parts.
#[derive(Debug, Clone, Default)]
pub struct StaticSuffixLookup {
    entries: HashMap<String, DomainParts>,
}

impl StaticSuffixLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `host` as `subdomain.domain.suffix`.
    pub fn with(mut self, host: &str, subdomain: &str, domain: &str, suffix: &str) -> Self {
        self.entries.insert(
            host.to_string(),
            DomainParts {
                subdomain: subdomain.to_string(),
                domain: domain.to_string(),
                suffix: suffix.to_string(),
                is_private: false,
            },
        );
        self
    }

    /// Like [`with`](Self::with), with the suffix flagged private.
    pub fn with_private(self, host: &str, subdomain: &str, domain: &str, suffix: &str) -> Self {
        let mut this = self.with(host, subdomain, domain, suffix);
        if let Some(parts) = this.entries.get_mut(host) {
            parts.is_private = true;
        }
        this
    }
}

impl SuffixLookup for StaticSuffixLookup {
    fn lookup(&self, url: &str) -> Result<DomainParts, ExtractError> {
        let host = lenient_host(url);
        Ok(self.entries.get(&host).cloned().unwrap_or_default())
    }
}
