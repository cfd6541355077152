pub mod config;
pub mod logging;

pub mod classifier;
pub mod detector;
pub mod error;
pub mod features;
pub mod suffix;
pub mod url_model;
