//! URL feature extraction.
//!
//! Each URL maps to a fixed, ordered vector of 14 numeric features. The
//! classifier consumes the vector positionally, so [`FEATURE_NAMES`] and
//! [`FeatureVector::as_array`] define the wire order: changing either
//! invalidates every trained model.
//!
//! Character-level features use the raw input. Port and query use the input
//! with `http://` prepended when it has no scheme. Domain features come from
//! the injected [`SuffixLookup`].

mod lexical;

pub use lexical::{
    count_file_path, count_special_char, count_url_dots, is_filter, ratio_alpha_numeric,
    value_entropy_url, FILTER_WORDS, SPECIAL_CHARS,
};

use serde::Serialize;

use crate::error::ExtractError;
use crate::suffix::SuffixLookup;
use crate::url_model::{effective_port, split_url, with_default_scheme};

pub const FEATURE_COUNT: usize = 14;

/// Feature names in vector order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "len_url",
    "len_sub_domain",
    "len_root_domain",
    "len_suffix",
    "is_private",
    "count_special_char",
    "num_port",
    "len_query",
    "count_sub_domain",
    "is_filter",
    "ratio_alpha_numeric",
    "count_url_dots",
    "value_entropy_url",
    "count_file_path",
];

/// Features of one URL. Field order matches [`FEATURE_NAMES`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    pub len_url: usize,
    pub len_sub_domain: usize,
    pub len_root_domain: usize,
    pub len_suffix: usize,
    pub is_private: u8,
    pub count_special_char: usize,
    pub num_port: u16,
    pub len_query: usize,
    pub count_sub_domain: usize,
    pub is_filter: u8,
    pub ratio_alpha_numeric: f64,
    pub count_url_dots: usize,
    pub value_entropy_url: f64,
    pub count_file_path: usize,
}

impl FeatureVector {
    /// Dense classifier input, in [`FEATURE_NAMES`] order.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.len_url as f64,
            self.len_sub_domain as f64,
            self.len_root_domain as f64,
            self.len_suffix as f64,
            f64::from(self.is_private),
            self.count_special_char as f64,
            f64::from(self.num_port),
            self.len_query as f64,
            self.count_sub_domain as f64,
            f64::from(self.is_filter),
            self.ratio_alpha_numeric,
            self.count_url_dots as f64,
            self.value_entropy_url,
            self.count_file_path as f64,
        ]
    }

    /// `(name, value)` pairs in vector order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.as_array())
    }
}

/// Explicit port, or the scheme default (443 for https, 80 otherwise).
pub fn num_port(url: &str) -> Result<u16, ExtractError> {
    effective_port(&split_url(&with_default_scheme(url))?)
}

/// Character count of the query component.
pub fn len_query(url: &str) -> Result<usize, ExtractError> {
    Ok(split_url(&with_default_scheme(url))?.query.chars().count())
}

/// Builds the feature vector for `url`.
///
/// Fails as a whole on the first error: a partial vector is never returned.
pub fn extract(url: &str, lookup: &dyn SuffixLookup) -> Result<FeatureVector, ExtractError> {
    let domain = lookup.lookup(url)?;
    let parts = split_url(&with_default_scheme(url))?;
    let num_port = effective_port(&parts)?;

    Ok(FeatureVector {
        len_url: url.chars().count(),
        len_sub_domain: domain.subdomain.chars().count(),
        len_root_domain: domain.domain.chars().count(),
        len_suffix: domain.suffix.chars().count(),
        is_private: u8::from(domain.is_private),
        count_special_char: count_special_char(url),
        num_port,
        len_query: parts.query.chars().count(),
        count_sub_domain: domain.subdomain_count(),
        is_filter: u8::from(is_filter(url)),
        ratio_alpha_numeric: ratio_alpha_numeric(url),
        count_url_dots: count_url_dots(url),
        value_entropy_url: value_entropy_url(url)?,
        count_file_path: count_file_path(url),
    })
}

#[cfg(test)]
mod tests;
