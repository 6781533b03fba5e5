//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReportGenerator` - Renders a computed quote as a document

mod report_generator;

pub use report_generator::{ReportError, ReportFormat, ReportGenerator, ReportOptions};
