//! Report Generator Port - Document export interface.
//!
//! Export collaborators read a computed [`Quote`] plus catalog metadata and
//! render it as a document. The engine never depends on a concrete format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::catalog::Catalog;
use crate::domain::engine::Quote;

/// Port for rendering quotes as documents.
///
/// # Contract
///
/// Implementations must:
/// - Render from the quote and catalog only (no recomputation)
/// - Produce identical output for identical inputs when `generated_at` is set
///
/// # Usage
///
/// ```rust,ignore
/// let generator: &dyn ReportGenerator = &MarkdownReportGenerator::new();
/// let document = generator.generate(&quote, &catalog, &ReportOptions::full())?;
/// ```
pub trait ReportGenerator: Send + Sync {
    /// Renders the full document.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if the quote cannot be rendered.
    fn generate(
        &self,
        quote: &Quote,
        catalog: &Catalog,
        options: &ReportOptions,
    ) -> Result<String, ReportError>;

    /// MIME type of the generated document.
    fn media_type(&self) -> &'static str;
}

/// Options for report generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Document title.
    pub title: String,

    /// Currency code printed next to amounts. No conversion is performed.
    pub currency: String,

    /// Include the metadata block (status, preset, generation time).
    pub include_metadata: bool,

    /// Include module, add-on and discount band tables.
    pub include_breakdown: bool,

    /// Fixed generation time. `None` means now.
    pub generated_at: Option<DateTime<Utc>>,
}

impl ReportOptions {
    /// Everything included.
    pub fn full() -> Self {
        Self {
            title: "Solution Proposal".to_string(),
            currency: "EUR".to_string(),
            include_metadata: true,
            include_breakdown: true,
            generated_at: None,
        }
    }

    /// Headline figures only.
    pub fn summary() -> Self {
        Self {
            include_metadata: false,
            include_breakdown: false,
            ..Self::full()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::full()
    }
}

/// Output format selector used by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

/// Errors that can occur during report generation.
#[derive(Debug, Clone, Error)]
pub enum ReportError {
    /// Serialising the quote failed.
    #[error("Failed to serialize quote: {0}")]
    Serialization(String),

    /// Missing required data for generation.
    #[error("Missing required data: {field}")]
    MissingData { field: String },
}

impl ReportError {
    /// Creates a missing data error.
    pub fn missing_data(field: impl Into<String>) -> Self {
        Self::MissingData {
            field: field.into(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
