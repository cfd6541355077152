//! Tests for features and validate-model.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_features() {
    match parse(&["urlsentry", "features", "http://mail.google.com/path"]) {
        CliCommand::Features { url, json } => {
            assert_eq!(url, "http://mail.google.com/path");
            assert!(!json);
        }
        _ => panic!("expected Features"),
    }
}

#[test]
fn cli_parse_features_json() {
    match parse(&["urlsentry", "features", "example.com", "--json"]) {
        CliCommand::Features { json, .. } => assert!(json),
        _ => panic!("expected Features with --json"),
    }
}

#[test]
fn cli_parse_validate_model() {
    match parse(&["urlsentry", "validate-model"]) {
        CliCommand::ValidateModel { model } => assert!(model.is_none()),
        _ => panic!("expected ValidateModel"),
    }
}

#[test]
fn cli_parse_validate_model_path() {
    match parse(&["urlsentry", "validate-model", "--model", "m.json"]) {
        CliCommand::ValidateModel { model } => {
            assert_eq!(model.as_deref(), Some(std::path::Path::new("m.json")))
        }
        _ => panic!("expected ValidateModel with --model"),
    }
}
