//! URL structure modeling.
//!
//! Two independent views of the same input string:
//! - [`split_url`] splits a scheme-normalized URL into its generic-URI
//!   components for port and query features. Lengths are measured on the text
//!   as written, so no WHATWG normalization (percent-encoding, default-port
//!   elision) is applied.
//! - [`lenient_host`] pulls a best-effort hostname out of the raw string for
//!   public-suffix decomposition. It never fails.

mod host;
mod split;

pub use host::{is_ipv6_literal, lenient_host};
pub use split::{split_url, UrlParts};

use std::borrow::Cow;

use crate::error::ExtractError;

/// Scheme prepended when the input has no `://`.
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Port reported when there is no explicit port and the scheme is not https.
/// Applies to every other scheme (ftp, ws, ...) as well.
pub const FALLBACK_PORT: u16 = 80;
pub const HTTPS_PORT: u16 = 443;

/// Prepends `http://` when the input contains no `://`.
pub fn with_default_scheme(url: &str) -> Cow<'_, str> {
    if url.contains("://") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{url}"))
    }
}

/// Explicit non-zero port, else 443 for https, else 80.
pub fn effective_port(parts: &UrlParts) -> Result<u16, ExtractError> {
    match parts.port()? {
        Some(port) if port != 0 => Ok(port),
        _ if parts.scheme == "https" => Ok(HTTPS_PORT),
        _ => Ok(FALLBACK_PORT),
    }
}
