//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONFIGURATOR` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use solution_configurator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Rendering {:?} reports", config.report.format);
//! ```

mod catalog;
mod error;
mod logging;
mod report;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use report::ReportConfig;

use serde::Deserialize;

use crate::domain::foundation::PresetId;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration that quotes from the bundled catalog.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Report rendering
    #[serde(default)]
    pub report: ReportConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Preset applied to the initial selection
    pub preset: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONFIGURATOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONFIGURATOR__CATALOG__PATH=./catalog.yaml` -> `catalog.path`
    /// - `CONFIGURATOR__REPORT__FORMAT=json` -> `report.format`
    /// - `CONFIGURATOR__PRESET=scale-operations` -> `preset`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONFIGURATOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.report.validate()?;
        self.logging.validate()?;
        self.preset_id()?;
        Ok(())
    }

    /// The configured preset as a typed id
    pub fn preset_id(&self) -> Result<Option<PresetId>, ValidationError> {
        self.preset
            .as_deref()
            .map(|raw| {
                PresetId::try_new(raw).map_err(|_| ValidationError::InvalidPreset(raw.to_string()))
            })
            .transpose()
    }
}
