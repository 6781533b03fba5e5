//! Engine module - Pure pricing and resource-allocation calculations.
//!
//! # Components
//!
//! - `WorkEstimator` - Base and effective work from modules and overhead
//! - `CapacityResolver` - Base capacity, add-on surcharges, pricing capacity
//! - `TimelineEstimator` - Completion weeks from work and base capacity
//! - `PricingResolver` - Marginal volume discounts and payment modifier
//! - `Quote` - Immutable snapshot handed to display and export collaborators
//! - `QuoteEngine` - Runs the pipeline in order
//!
//! All functions are pure and stateless: they borrow the selection and the
//! catalog and return new values.

mod capacity_resolver;
mod pricing_resolver;
mod quote;
mod quote_engine;
mod timeline_estimator;
mod work_estimator;

pub use capacity_resolver::{AddOnLine, CapacityEstimate, CapacityResolver};
pub use pricing_resolver::{BandCharge, PriceBreakdown, PricingResolver};
pub use quote::{Quote, QuoteConfiguration};
pub use quote_engine::QuoteEngine;
pub use timeline_estimator::TimelineEstimator;
pub use work_estimator::{ModuleWorkLine, WorkEstimate, WorkEstimator};
