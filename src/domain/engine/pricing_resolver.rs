//! Pricing Resolver - Marginal volume discounts and payment modifier.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::DiscountSchedule;
use crate::domain::foundation::round_currency;

/// Charge for the units that fell into one discount band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandCharge {
    pub lower: f64,
    pub upper: Option<f64>,
    pub discount: f64,
    pub units: f64,
    /// `units × base price × (1 − discount)`, unrounded.
    pub charge: f64,
}

/// Output of [`PricingResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_unit_price: f64,
    pub payment_multiplier: f64,
    /// `pricing_capacity × base price`, before any discount.
    pub full_price: f64,
    /// Sum of band charges, before the payment modifier.
    pub discounted_price: f64,
    /// Discounted price after the payment modifier, unrounded.
    pub exact_final_price: f64,
    /// Weekly price rounded to whole currency units.
    pub final_price: f64,
    pub effective_unit_price: f64,
    pub volume_discount_percentage: f64,
    /// Bands that received at least one unit, ascending.
    pub bands: Vec<BandCharge>,
}

/// Turns pricing capacity into a weekly price.
pub struct PricingResolver;

impl PricingResolver {
    /// Prices `pricing_capacity` work units per week.
    ///
    /// Every unit is charged at the rate of the single band it falls into.
    /// Band charges are summed unrounded; only the final price is rounded.
    ///
    /// # Edge Cases
    /// - Zero capacity: price 0, unit price falls back to the base price
    ///   after the payment modifier, discount percentage 0
    pub fn resolve(
        pricing_capacity: f64,
        base_unit_price: f64,
        schedule: &DiscountSchedule,
        payment_multiplier: f64,
    ) -> PriceBreakdown {
        if pricing_capacity <= 0.0 {
            return PriceBreakdown {
                base_unit_price,
                payment_multiplier,
                full_price: 0.0,
                discounted_price: 0.0,
                exact_final_price: 0.0,
                final_price: 0.0,
                effective_unit_price: base_unit_price * payment_multiplier,
                volume_discount_percentage: 0.0,
                bands: Vec::new(),
            };
        }

        let bands: Vec<BandCharge> = schedule
            .bands()
            .iter()
            .map(|band| {
                let units = band.units_within(pricing_capacity);
                BandCharge {
                    lower: band.lower,
                    upper: band.upper,
                    discount: band.discount,
                    units,
                    charge: units * base_unit_price * (1.0 - band.discount),
                }
            })
            .filter(|charge| charge.units > 0.0)
            .collect();

        let full_price = pricing_capacity * base_unit_price;
        let discounted_price: f64 = bands.iter().map(|b| b.charge).sum();
        let exact_final_price = discounted_price * payment_multiplier;

        PriceBreakdown {
            base_unit_price,
            payment_multiplier,
            full_price,
            discounted_price,
            exact_final_price,
            final_price: round_currency(exact_final_price),
            effective_unit_price: exact_final_price / pricing_capacity,
            volume_discount_percentage: (full_price - discounted_price) / full_price * 100.0,
            bands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::VolumeDiscountTier;

    fn schedule(tiers: &[(f64, f64)]) -> DiscountSchedule {
        DiscountSchedule::try_new(
            tiers
                .iter()
                .map(|(threshold, discount)| VolumeDiscountTier::new(*threshold, *discount))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn single_tier_discounts_only_units_above_threshold() {
        let price = PricingResolver::resolve(50.0, 10.0, &schedule(&[(30.0, 0.1)]), 1.0);

        // 30 × 10 + 20 × 10 × 0.9
        assert_eq!(price.final_price, 480.0);
        assert_eq!(price.bands.len(), 2);
        assert_eq!(price.bands[0].units, 30.0);
        assert_eq!(price.bands[1].units, 20.0);
        assert!((price.volume_discount_percentage - 4.0).abs() < 1e-9);
        assert!((price.effective_unit_price - 9.6).abs() < 1e-9);
    }

    #[test]
    fn payment_multiplier_applies_after_discounts() {
        let price = PricingResolver::resolve(50.0, 10.0, &schedule(&[(30.0, 0.1)]), 0.9);

        assert_eq!(price.final_price, 432.0);
        assert!((price.discounted_price - 480.0).abs() < 1e-9);
        // volume discount is reported before the payment modifier
        assert!((price.volume_discount_percentage - 4.0).abs() < 1e-9);
    }

    #[test]
    fn capacity_below_first_threshold_pays_full_price() {
        let price = PricingResolver::resolve(20.0, 10.0, &schedule(&[(30.0, 0.1)]), 1.0);

        assert_eq!(price.final_price, 200.0);
        assert_eq!(price.bands.len(), 1);
        assert_eq!(price.volume_discount_percentage, 0.0);
    }

    #[test]
    fn units_are_split_across_many_bands() {
        let tiers = schedule(&[(10.0, 0.1), (20.0, 0.2), (40.0, 0.3)]);
        let price = PricingResolver::resolve(50.0, 1.0, &tiers, 1.0);

        // 10×1 + 10×0.9 + 20×0.8 + 10×0.7 = 42
        assert!((price.discounted_price - 42.0).abs() < 1e-9);
        assert_eq!(price.final_price, 42.0);
        let units: Vec<f64> = price.bands.iter().map(|b| b.units).collect();
        assert_eq!(units, vec![10.0, 10.0, 20.0, 10.0]);
    }

    #[test]
    fn zero_capacity_costs_nothing() {
        let price = PricingResolver::resolve(0.0, 10.0, &schedule(&[(30.0, 0.1)]), 0.9);

        assert_eq!(price.final_price, 0.0);
        assert!(price.bands.is_empty());
        assert!((price.effective_unit_price - 9.0).abs() < 1e-9);
        assert_eq!(price.volume_discount_percentage, 0.0);
    }

    #[test]
    fn final_price_rounds_to_whole_units() {
        let price = PricingResolver::resolve(3.0, 3.35, &DiscountSchedule::flat(), 1.0);

        assert!((price.exact_final_price - 10.05).abs() < 1e-9);
        assert_eq!(price.final_price, 10.0);
    }

    #[test]
    fn flat_schedule_has_no_discount() {
        let price = PricingResolver::resolve(75.0, 85.0, &DiscountSchedule::flat(), 1.0);

        assert_eq!(price.final_price, 6375.0);
        assert_eq!(price.volume_discount_percentage, 0.0);
    }
}
