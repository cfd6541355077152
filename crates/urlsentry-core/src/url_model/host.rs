//! Lenient hostname extraction for public-suffix decomposition.

/// Full-width and ideographic dots treated as label separators.
const ALT_DOTS: [char; 3] = ['\u{3002}', '\u{ff0e}', '\u{ff61}'];

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Drops a leading `scheme://` or `//`, if present.
fn schemeless(url: &str) -> &str {
    match url.find("//") {
        Some(0) => &url[2..],
        Some(i) if i >= 2 => {
            let head = &url[..i];
            match head.strip_suffix(':') {
                Some(scheme) if scheme.chars().all(is_scheme_char) => &url[i + 2..],
                _ => url,
            }
        }
        _ => url,
    }
}

/// Best-effort hostname of `url`, with or without a scheme.
///
/// Strips userinfo, port, path, query and fragment, and any trailing
/// root-label dots. Alternative dot characters are folded to `.`. A leading
/// bracketed literal (`[::1]`) is returned with its brackets. Never fails:
/// garbage in gives garbage (or an empty string) out.
pub fn lenient_host(url: &str) -> String {
    let rest = schemeless(url);
    let authority = rest
        .split(&['/', '?', '#'][..])
        .next()
        .unwrap_or_default();
    let after_userinfo = authority.rsplit_once('@').map_or(authority, |(_, h)| h);

    if after_userinfo.starts_with('[') {
        if let Some(end) = after_userinfo.find(']') {
            return after_userinfo[..=end].to_string();
        }
    }

    let hostname = after_userinfo
        .split(':')
        .next()
        .unwrap_or_default()
        .trim();
    hostname
        .trim_end_matches(|c: char| c == '.' || ALT_DOTS.contains(&c))
        .replace(&ALT_DOTS[..], ".")
}

/// True if `addr` (without brackets) is an IPv6 address, optionally with a
/// non-empty `%scope` suffix.
pub fn is_ipv6_literal(addr: &str) -> bool {
    let addr = match addr.split_once('%') {
        Some((a, scope)) => {
            if scope.is_empty() || scope.contains('%') {
                return false;
            }
            a
        }
        None => addr,
    };
    matches!(
        url::Host::parse(&format!("[{addr}]")),
        Ok(url::Host::Ipv6(_))
    )
}
