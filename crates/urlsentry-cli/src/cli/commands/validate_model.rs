//! `urlsentry validate-model` – load the model and report its shape.

use anyhow::{Context, Result};
use std::path::Path;
use urlsentry_core::classifier::TreeEnsemble;
use urlsentry_core::config::SentryConfig;

pub fn run_validate_model(cfg: &SentryConfig, model: Option<&Path>) -> Result<()> {
    let path = super::model_path(cfg, model)?;
    let mut ensemble =
        TreeEnsemble::load(&path).with_context(|| format!("load model {}", path.display()))?;
    if let Some(t) = cfg.threshold {
        ensemble = ensemble.with_threshold(t)?;
    }
    println!("Model OK: {}", path.display());
    println!("  trees:     {}", ensemble.tree_count());
    println!("  threshold: {}", ensemble.threshold());
    Ok(())
}
