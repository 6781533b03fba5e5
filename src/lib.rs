//! Solution Configurator - Pricing and resource-allocation engine
//!
//! Turns a selection of consulting modules, an allocation strategy, a
//! capacity tier, a payment option and service add-ons into a quote:
//! effective work, completion weeks, weekly price and effective unit price.
//!
//! The domain is pure and synchronous. Catalog data is loaded once and
//! shared read-only; every mutation of a [`domain::selection::Selection`]
//! is followed by [`domain::engine::QuoteEngine::recompute`].

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
