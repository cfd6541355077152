//! `urlsentry check <url>` – classify one URL.

use anyhow::{Context, Result};
use std::path::Path;
use urlsentry_core::config::SentryConfig;
use urlsentry_core::detector::Detector;

/// Exit code when the verdict is indeterminate.
pub const EXIT_INDETERMINATE: i32 = 2;

pub fn run_check(cfg: &SentryConfig, model: Option<&Path>, url: &str) -> Result<i32> {
    let path = super::model_path(cfg, model)?;
    let detector = Detector::load(&path, cfg.threshold)
        .with_context(|| format!("load model {}", path.display()))?;

    let verdict = detector.classify(url).context("classifier failed")?;
    tracing::info!(url, verdict = verdict.as_str(), "check");
    println!("{verdict}");

    Ok(if verdict.is_decided() {
        0
    } else {
        EXIT_INDETERMINATE
    })
}
