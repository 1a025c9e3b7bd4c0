//! Configuration module for the exporter.
//!
//! This module handles:
//! - The run configuration built from CLI arguments and environment
//! - Configuration validation

pub mod settings;
pub mod validation;

pub use settings::{Config, DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};
pub use validation::{normalize_base_url, validate_config};
