//! CLI for the urlsentry classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlsentry_core::config;

use commands::{run_check, run_features, run_validate_model};

/// Top-level CLI for urlsentry.
#[derive(Debug, Parser)]
#[command(name = "urlsentry")]
#[command(about = "urlsentry: lexical malicious-URL classifier", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/urlsentry/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a URL as malicious, benign or indeterminate.
    Check {
        /// URL to classify (scheme optional).
        url: String,
        /// Model file; overrides model_path from the config.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },

    /// Print the feature vector of a URL in classifier order.
    Features {
        /// URL to analyse (scheme optional).
        url: String,
        /// Print a JSON object instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Load and validate the model, then print a summary.
    ValidateModel {
        /// Model file; overrides model_path from the config.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },
}

impl CliCommand {
    /// Runs the parsed command and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { url, model } => run_check(&cfg, model.as_deref(), &url),
            CliCommand::Features { url, json } => {
                run_features(&url, json)?;
                Ok(0)
            }
            CliCommand::ValidateModel { model } => {
                run_validate_model(&cfg, model.as_deref())?;
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests;
