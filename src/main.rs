//! `configurator` - prints a quote for the configured selection.
//!
//! Reads configuration from `CONFIGURATOR__*` environment variables, loads
//! the catalog, applies the configured preset to the default selection and
//! writes the rendered report to stdout. Logs go to stderr.

use std::process::ExitCode;

use thiserror::Error;
use tracing::{error, info};

use solution_configurator::adapters::generator_for;
use solution_configurator::config::{AppConfig, ConfigError, LoggingConfig};
use solution_configurator::domain::catalog::{Catalog, CatalogError};
use solution_configurator::domain::engine::QuoteEngine;
use solution_configurator::domain::selection::{Selection, SelectionError};
use solution_configurator::ports::ReportError;

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

fn init_logging(config: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(config: &AppConfig) -> Result<String, RunError> {
    let owned;
    let catalog: &Catalog = match &config.catalog.path {
        Some(path) => {
            owned = Catalog::from_path(path)?;
            &owned
        }
        None => Catalog::bundled()?,
    };

    let mut selection = Selection::new(catalog);
    if let Some(preset) = config.preset_id().map_err(ConfigError::from)? {
        selection.apply_preset(catalog, &preset)?;
        info!(preset = %preset, "Quoting preset");
    }

    let quote = QuoteEngine::recompute(&selection, catalog);
    let generator = generator_for(config.report.format);
    let document = generator.generate(&quote, catalog, &config.report.options())?;
    Ok(document)
}

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configurator: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging);

    if let Err(err) = config.validate() {
        error!(error = %err, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(document) => {
            println!("{document}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Failed to produce quote");
            ExitCode::FAILURE
        }
    }
}
