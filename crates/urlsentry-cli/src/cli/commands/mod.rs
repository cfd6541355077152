//! CLI command handlers, one file per command.

mod check;
mod features;
mod validate_model;

pub use check::run_check;
pub use features::run_features;
pub use validate_model::run_validate_model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use urlsentry_core::config::SentryConfig;

/// `--model` if given, else the configured or default model path.
fn model_path(cfg: &SentryConfig, model: Option<&Path>) -> Result<PathBuf> {
    match model {
        Some(p) => Ok(p.to_path_buf()),
        None => cfg
            .resolved_model_path()
            .context("resolve default model path"),
    }
}
