//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Catalog path must point to a .yaml or .yml file")]
    InvalidCatalogPath,

    #[error("Currency must be a three-letter uppercase code")]
    InvalidCurrency,

    #[error("Report title must not be empty")]
    EmptyReportTitle,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),

    #[error("Preset id is not a valid slug: {0}")]
    InvalidPreset(String),
}
