//! `urlsentry features <url>` – print the feature vector.

use anyhow::{Context, Result};
use urlsentry_core::features;
use urlsentry_core::suffix::PslLookup;

pub fn run_features(url: &str, json: bool) -> Result<()> {
    let vector = features::extract(url, &PslLookup::new())
        .with_context(|| format!("extract features of {url:?}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&vector)?);
        return Ok(());
    }

    println!("{:<3} {:<22} {}", "#", "FEATURE", "VALUE");
    for (i, (name, value)) in vector.named().enumerate() {
        println!("{:<3} {:<22} {}", i + 1, name, value);
    }
    Ok(())
}
