//! Decomposition backed by the compiled-in Public Suffix List.

use psl::Type;

use super::{DomainParts, SuffixLookup};
use crate::error::ExtractError;
use crate::url_model::{is_ipv6_literal, lenient_host};

/// Lookup against the Public Suffix List, private entries included.
///
/// Only explicit list entries count as a suffix: a host under an unlisted TLD
/// gets an empty suffix and its last label as the domain. IP hosts are
/// returned whole as the domain, including dotted quads with zero-padded
/// octets such as `010.0.0.1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslLookup;

impl PslLookup {
    pub fn new() -> Self {
        Self
    }
}

fn looks_like_ipv6(host: &str) -> bool {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .is_some_and(is_ipv6_literal)
}

/// Four dot-separated octets of 1-3 ASCII digits, each at most 255.
/// Leading zeros are allowed.
fn looks_like_ipv4(host: &str) -> bool {
    let octets: Vec<&str> = host.split('.').collect();
    octets.len() == 4
        && octets.iter().all(|o| {
            (1..=3).contains(&o.len())
                && o.bytes().all(|b| b.is_ascii_digit())
                && o.parse::<u16>().is_ok_and(|v| v <= 255)
        })
}

/// Label count and privacy of the longest listed suffix of `host`, or `None`
/// when no listed entry matches.
fn listed_suffix(host: &str) -> Result<Option<(usize, bool)>, ExtractError> {
    let lower = host.to_lowercase();
    let suffix = psl::suffix(lower.as_bytes()).ok_or_else(|| ExtractError::SuffixLookup {
        host: host.to_string(),
        reason: "public suffix list cannot process host".into(),
    })?;
    if !suffix.is_known() {
        return Ok(None);
    }
    let labels = suffix.as_bytes().iter().filter(|&&b| b == b'.').count() + 1;
    Ok(Some((labels, suffix.typ() == Some(Type::Private))))
}

impl SuffixLookup for PslLookup {
    fn lookup(&self, url: &str) -> Result<DomainParts, ExtractError> {
        let host = lenient_host(url);
        if host.chars().any(char::is_control) {
            return Err(ExtractError::SuffixLookup {
                host,
                reason: "control character in host".into(),
            });
        }
        if host.is_empty() {
            return Ok(DomainParts::default());
        }
        if looks_like_ipv6(&host) {
            return Ok(DomainParts {
                domain: host,
                ..DomainParts::default()
            });
        }

        let labels: Vec<&str> = host.split('.').collect();
        let (suffix_index, is_private) = match listed_suffix(&host)? {
            Some((n, private)) => (labels.len().saturating_sub(n), private),
            None if looks_like_ipv4(&host) => {
                return Ok(DomainParts {
                    domain: host,
                    ..DomainParts::default()
                });
            }
            None => (labels.len(), false),
        };

        let suffix = labels[suffix_index..].join(".");
        let domain = match suffix_index {
            0 => String::new(),
            i => labels[i - 1].to_string(),
        };
        let subdomain = if suffix_index >= 2 {
            labels[..suffix_index - 1].join(".")
        } else {
            String::new()
        };

        tracing::trace!(%host, %subdomain, %domain, %suffix, is_private, "suffix lookup");

        Ok(DomainParts {
            subdomain,
            domain,
            suffix,
            is_private,
        })
    }
}
