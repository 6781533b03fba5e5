//! End-to-end quote scenarios through the public API.
//!
//! Each test mutates a selection the way a display layer would and checks
//! the recomputed quote.

mod common;

use solution_configurator::domain::catalog::{
    AllocationStrategy, CapacityTier, Catalog, EngagementType, PaymentOption,
};
use solution_configurator::domain::engine::QuoteEngine;
use solution_configurator::domain::selection::{Selection, SelectionError, SelectionStatus};

use common::{catalog, module, parameter, preset};

// =============================================================================
// Worked scenarios
// =============================================================================

#[test]
fn scenario_a_empty_selection_quotes_nothing() {
    let catalog = catalog();
    let selection = Selection::new(&catalog);

    let quote = QuoteEngine::recompute(&selection, &catalog);

    assert_eq!(quote.base_work, 0.0);
    assert_eq!(quote.effective_work, 0.0);
    assert_eq!(quote.completion_weeks, 0);
    assert_eq!(quote.final_price, 0.0);
    assert_eq!(quote.configuration.status, SelectionStatus::Default);
}

#[test]
fn scenario_a_empty_selection_charges_add_ons_at_base_price() {
    let catalog = catalog();
    let mut selection = Selection::new(&catalog);
    selection.set_parameter(&catalog, &parameter("dedicated_lead"), true).unwrap();

    let quote = QuoteEngine::recompute(&selection, &catalog);

    assert_eq!(quote.completion_weeks, 0);
    assert_eq!(quote.pricing_capacity, 10.0);
    assert_eq!(quote.final_price, 100.0);
}

#[test]
fn scenario_b_single_module_without_overhead() {
    let catalog = catalog();
    let mut selection = Selection::new(&catalog);
    selection.select_module(&catalog, &module("process-audit")).unwrap();

    let quote = QuoteEngine::recompute(&selection, &catalog);

    assert_eq!(quote.base_work, 100.0);
    assert_eq!(quote.effective_work, 100.0);
    assert_eq!(quote.base_capacity, 20.0);
    assert_eq!(quote.completion_weeks, 5);
    assert_eq!(quote.allocation_description, "Focused (no switching overhead)");
}

#[test]
fn scenario_c_switching_overhead_extends_timeline() {
    let catalog = catalog();
    let mut selection = Selection::new(&catalog);
    selection.select_module(&catalog, &module("process-audit")).unwrap();
    selection.set_allocation(AllocationStrategy::Parallel);

    let quote = QuoteEngine::recompute(&selection, &catalog);

    assert_eq!(quote.base_work, 100.0);
    assert!((quote.effective_work - 120.0).abs() < 1e-9);
    assert_eq!(quote.completion_weeks, 6);
    assert_eq!(
        quote.allocation_description,
        "Parallel (+20% switching overhead on required work)"
    );
}

#[test]
fn fractional_switching_overhead_loads_and_applies() {
    let yaml = common::CATALOG_YAML.replace("switching_overhead: 20", "switching_overhead: 12.5");
    let catalog = Catalog::from_yaml_str(&yaml).unwrap();
    let mut selection = Selection::new(&catalog);
    selection.select_module(&catalog, &module("process-audit")).unwrap();
    selection.set_allocation(AllocationStrategy::Parallel);

    let quote = QuoteEngine::recompute(&selection, &catalog);

    assert!((quote.effective_work - 112.5).abs() < 1e-9);
    // 112.5 / 20 = 5.625
    assert_eq!(quote.completion_weeks, 6);
    assert_eq!(
        quote.allocation_description,
        "Parallel (+12.5% switching overhead on required work)"
    );
}

#[test]
fn scenario_d_marginal_volume_discount() {
    let catalog = catalog();
    let mut selection = Selection::new(&catalog);
    selection.select_module(&catalog, &module("kickoff")).unwrap();
    selection.set_capacity_tier(CapacityTier::Core);
    selection.set_parameter(&catalog, &parameter("dedicated_lead"), true).unwrap();

    let quote = QuoteEngine::recompute(&selection, &catalog);

    // 40 tier units + 10 lead units; 30 x 10 + 20 x 10 x 0.9
    assert_eq!(quote.pricing_capacity, 50.0);
    assert_eq!(quote.final_price, 480.0);
    assert!((quote.effective_unit_price - 9.6).abs() < 1e-9);
    assert!((quote.volume_discount_percentage - 4.0).abs() < 1e-9);
    assert_eq!(quote.bands.len(), 2);
}

#[test]
fn scenario_e_prepayment_applies_after_discount() {
    let catalog = catalog();
    let mut selection = Selection::new(&catalog);
    selection.select_module(&catalog, &module("kickoff")).unwrap();
    selection.set_capacity_tier(CapacityTier::Core);
    selection.set_parameter(&catalog, &parameter("dedicated_lead"), true).unwrap();
    selection.set_payment(PaymentOption::PrepaidAnnual);

    let quote = QuoteEngine::recompute(&selection, &catalog);

    assert_eq!(quote.final_price, 432.0);
    assert_eq!(quote.payment_multiplier, 0.9);
}

// =============================================================================
// Timeline and capacity
// =============================================================================

#[test]
fn add_ons_never_shorten_the_timeline() {
    let catalog = catalog();
    let mut selection = Selection::new(&catalog);
    selection.select_module(&catalog, &module("process-audit")).unwrap();
    let without = QuoteEngine::recompute(&selection, &catalog);

    selection.set_parameter(&catalog, &parameter("dedicated_lead"), true).unwrap();
    selection.set_parameter(&catalog, &parameter("priority_support"), true).unwrap();
    let with = QuoteEngine::recompute(&selection, &catalog);

    assert_eq!(without.completion_weeks, with.completion_weeks);
    assert!(with.final_price > without.final_price);
}

#[test]
fn small_work_takes_at_least_one_week() {
    let catalog = catalog();
    let mut selection = Selection::new(&catalog);
    selection.select_module(&catalog, &module("kickoff")).unwrap();
    selection.set_capacity_tier(CapacityTier::Enterprise);

    let quote = QuoteEngine::recompute(&selection, &catalog);

    assert_eq!(quote.effective_work, 10.0);
    assert_eq!(quote.completion_weeks, 1);
}

#[test]
fn variant_choice_changes_work() {
    let catalog = catalog();
    let mut selection = Selection::new(&catalog);
    selection.select_module(&catalog, &module("process-audit")).unwrap();
    selection
        .set_variant(&catalog, &module("process-audit"), EngagementType::Primer)
        .unwrap();

    let quote = QuoteEngine::recompute(&selection, &catalog);

    assert_eq!(quote.base_work, 40.0);
    assert!(!quote.modules[0].defaulted);
    assert_eq!(quote.completion_weeks, 2);
}

// =============================================================================
// Presets and lifecycle
// =============================================================================

#[test]
fn preset_configures_whole_selection() {
    let catalog = catalog();
    let mut selection = Selection::new(&catalog);
    selection
        .apply_preset(&catalog, &preset("modernise-operations"))
        .unwrap();

    let quote = QuoteEngine::recompute(&selection, &catalog);

    assert_eq!(quote.configuration.status, SelectionStatus::Configured);
    assert_eq!(quote.configuration.allocation, AllocationStrategy::Parallel);
    assert_eq!(quote.configuration.capacity_tier, CapacityTier::Core);
    // primer audit 40 + default data-foundation primer 60, +20% overhead
    assert_eq!(quote.base_work, 100.0);
    assert!((quote.effective_work - 120.0).abs() < 1e-9);
    assert_eq!(quote.completion_weeks, 3);
    // 40 + ceil(4) = 44 units; (300 + 14 x 9) x 0.9 = 383.4
    assert_eq!(quote.pricing_capacity, 44.0);
    assert_eq!(quote.final_price, 383.0);
}

#[test]
fn manual_edit_after_preset_clears_preset() {
    let catalog = catalog();
    let mut selection = Selection::new(&catalog);
    selection
        .apply_preset(&catalog, &preset("modernise-operations"))
        .unwrap();
    selection.select_module(&catalog, &module("kickoff")).unwrap();

    let quote = QuoteEngine::recompute(&selection, &catalog);

    assert_eq!(quote.configuration.status, SelectionStatus::Configured);
    assert_eq!(quote.configuration.preset, None);
}

#[test]
fn reset_reproduces_cold_start_quote() {
    let catalog = catalog();
    let fresh = Selection::new(&catalog);
    let cold_start = QuoteEngine::recompute(&fresh, &catalog);

    let mut selection = Selection::new(&catalog);
    selection
        .apply_preset(&catalog, &preset("modernise-operations"))
        .unwrap();
    selection.set_capacity_tier(CapacityTier::Enterprise);
    selection.set_payment(PaymentOption::PrepaidQuarterly);
    selection.set_parameter(&catalog, &parameter("weekly_digest"), false).unwrap();
    selection.reset(&catalog);

    assert!(selection.same_choices(&fresh));
    assert!(selection.revision() > fresh.revision());
    assert_eq!(QuoteEngine::recompute(&selection, &catalog), cold_start);
}

#[test]
fn unknown_ids_are_rejected_at_mutation() {
    let catalog = catalog();
    let mut selection = Selection::new(&catalog);

    assert!(matches!(
        selection.select_module(&catalog, &module("does-not-exist")),
        Err(SelectionError::UnknownModule(_))
    ));
    assert!(matches!(
        selection.set_parameter(&catalog, &parameter("nope"), true),
        Err(SelectionError::UnknownParameter(_))
    ));
    assert!(matches!(
        selection.apply_preset(&catalog, &preset("nope")),
        Err(SelectionError::UnknownPreset(_))
    ));
    assert_eq!(selection.revision(), 0);
}
