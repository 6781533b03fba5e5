//! Adapters - Implementations of port interfaces.
//!
//! - `document` - Report generators (markdown, JSON)

pub mod document;

pub use document::{generator_for, JsonReportGenerator, MarkdownReportGenerator};
