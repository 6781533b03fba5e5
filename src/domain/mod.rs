//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, percentage, numeric helpers, errors)
//! - `catalog` - Validated static configuration (modules, tiers, discounts, presets)
//! - `selection` - Caller-owned user choices and their lifecycle
//! - `engine` - Pure recompute pipeline producing a `Quote`

pub mod catalog;
pub mod engine;
pub mod foundation;
pub mod selection;
