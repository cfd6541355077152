//! Extraction tests against the real suffix list and a fixed table.

use super::*;
use crate::suffix::{PslLookup, StaticSuffixLookup};

fn features(url: &str) -> FeatureVector {
    extract(url, &PslLookup::new()).unwrap()
}

#[test]
fn names_match_vector_order() {
    let v = features("http://mail.google.com/path?q=1");
    let json = serde_json::to_value(&v).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), FEATURE_COUNT);
    for (name, value) in v.named() {
        assert_eq!(obj[name].as_f64().unwrap(), value, "{name}");
    }
}

#[test]
fn google_mail_decomposition() {
    let v = features("http://mail.google.com/path");
    assert_eq!(v.len_sub_domain, 4);
    assert_eq!(v.len_root_domain, 6);
    assert_eq!(v.len_suffix, 3);
    assert_eq!(v.count_sub_domain, 1);
    assert_eq!(v.is_private, 0);
}

#[test]
fn full_vector_for_phishing_style_url() {
    let url = "http://paypal-signin.verify-account.com/login";
    let v = features(url);
    assert_eq!(v.len_url, 45);
    assert_eq!(v.len_sub_domain, 13);
    assert_eq!(v.len_root_domain, 14);
    assert_eq!(v.len_suffix, 3);
    assert_eq!(v.is_private, 0);
    assert_eq!(v.count_special_char, 2);
    assert_eq!(v.num_port, 80);
    assert_eq!(v.len_query, 0);
    assert_eq!(v.count_sub_domain, 1);
    assert_eq!(v.is_filter, 1);
    assert_eq!(v.count_url_dots, 2);
    assert_eq!(v.count_file_path, 3);
    assert!(v.value_entropy_url > 0.0);
    assert!(v.ratio_alpha_numeric > 0.0 && v.ratio_alpha_numeric < 1.0);
}

#[test]
fn ports() {
    assert_eq!(num_port("https://example.com").unwrap(), 443);
    assert_eq!(num_port("http://example.com").unwrap(), 80);
    assert_eq!(num_port("http://example.com:8080").unwrap(), 8080);
    assert_eq!(features("example.com:3000/x").num_port, 3000);
}

#[test]
fn query_length_uses_normalized_url() {
    assert_eq!(len_query("example.com/search?q=abc").unwrap(), 5);
    assert_eq!(len_query("http://example.com/").unwrap(), 0);
    assert_eq!(len_query("http://example.com/?q=é").unwrap(), 3);
}

#[test]
fn schemeless_url_uses_raw_text_for_lexical_features() {
    let v = features("example.com/a");
    assert_eq!(v.len_url, 13);
    assert_eq!(v.count_file_path, 1);
    assert_eq!(v.len_root_domain, 7);
    assert_eq!(v.len_suffix, 3);
}

#[test]
fn private_suffix_flag() {
    let v = features("https://someone.github.io/repo");
    assert_eq!(v.is_private, 1);
    assert_eq!(v.len_root_domain, 7);
    assert_eq!(v.len_suffix, 9);
    assert_eq!(v.count_sub_domain, 0);
}

#[test]
fn idempotent() {
    let url = "https://x.y.example.co.uk:8443/a/b?c=d&e=f#g";
    let a = features(url).as_array();
    let b = features(url).as_array();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn empty_url_fails_closed() {
    assert_eq!(
        extract("", &PslLookup::new()),
        Err(ExtractError::EmptyInput)
    );
}

#[test]
fn malformed_authority_fails_whole_vector() {
    for url in ["http://[::1/", "http://example.com:port/", "http://example.com:99999"] {
        assert!(
            matches!(
                extract(url, &PslLookup::new()),
                Err(ExtractError::MalformedInput { .. })
            ),
            "{url}"
        );
    }
}

#[test]
fn fullwidth_solidus_in_host_fails_whole_vector() {
    assert!(matches!(
        extract("http://evil.com\u{FF0F}paypal.com/", &PslLookup::new()),
        Err(ExtractError::MalformedInput { .. })
    ));
}

#[test]
fn zero_padded_ip_host_is_one_domain() {
    let v = features("http://010.0.0.1/");
    assert_eq!(v.len_sub_domain, 0);
    assert_eq!(v.len_root_domain, 9);
    assert_eq!(v.len_suffix, 0);
    assert_eq!(v.count_sub_domain, 0);
}

#[test]
fn suffix_failure_fails_whole_vector() {
    assert!(matches!(
        extract("http://bad\u{0}host.com/", &PslLookup::new()),
        Err(ExtractError::SuffixLookup { .. })
    ));
}

#[test]
fn injected_lookup_drives_domain_features() {
    let lookup = StaticSuffixLookup::new().with_private("a.b.shop.test", "a.b", "shop", "test");
    let v = extract("http://a.b.shop.test/", &lookup).unwrap();
    assert_eq!(v.len_sub_domain, 3);
    assert_eq!(v.len_root_domain, 4);
    assert_eq!(v.len_suffix, 4);
    assert_eq!(v.count_sub_domain, 2);
    assert_eq!(v.is_private, 1);
}

#[test]
fn ip_host() {
    let v = features("http://10.0.0.1/admin");
    assert_eq!(v.len_sub_domain, 0);
    assert_eq!(v.len_root_domain, 8);
    assert_eq!(v.len_suffix, 0);
    assert_eq!(v.count_url_dots, 3);
}
