//! Document adapters - Implementations of the report generator port.
//!
//! - `MarkdownReportGenerator` - Proposal document in markdown
//! - `JsonReportGenerator` - Machine-readable quote envelope

mod json_report;
mod markdown_report;

pub use json_report::JsonReportGenerator;
pub use markdown_report::MarkdownReportGenerator;

use crate::ports::{ReportFormat, ReportGenerator};

/// Returns the generator for a configured output format.
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReportGenerator::new()),
        ReportFormat::Json => Box::new(JsonReportGenerator::new()),
    }
}
