//! Report output configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::{ReportFormat, ReportOptions};

/// How the binary renders the quote
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Output format (markdown or json)
    #[serde(default)]
    pub format: ReportFormat,

    /// Document title
    #[serde(default = "default_title")]
    pub title: String,

    /// Currency code printed next to amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Only print headline figures
    #[serde(default)]
    pub summary_only: bool,
}

impl ReportConfig {
    /// Builds generator options from this configuration
    pub fn options(&self) -> ReportOptions {
        let base = if self.summary_only {
            ReportOptions::summary()
        } else {
            ReportOptions::full()
        };
        base.with_title(self.title.clone())
            .with_currency(self.currency.clone())
    }

    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyReportTitle);
        }
        let valid_currency =
            self.currency.len() == 3 && self.currency.chars().all(|c| c.is_ascii_uppercase());
        if !valid_currency {
            return Err(ValidationError::InvalidCurrency);
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            title: default_title(),
            currency: default_currency(),
            summary_only: false,
        }
    }
}

fn default_title() -> String {
    "Solution Proposal".to_string()
}

fn default_currency() -> String {
    "EUR".to_string()
}
