//! Marginal volume-discount schedule.
//!
//! Tiers are sorted and validated once at load time into contiguous
//! [`DiscountBand`]s. Each work unit falls into exactly one band and is priced
//! at that band's rate only.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::ValidationError;

/// A configured discount tier: units above `threshold` get `discount`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeDiscountTier {
    pub threshold: f64,
    /// Fraction in [0, 1). 0.1 means 10% off.
    pub discount: f64,
}

impl VolumeDiscountTier {
    pub fn new(threshold: f64, discount: f64) -> Self {
        Self {
            threshold,
            discount,
        }
    }
}

/// A half-open range `[lower, upper)` of work units sharing one rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountBand {
    pub lower: f64,
    /// None for the open-ended top band.
    pub upper: Option<f64>,
    pub discount: f64,
}

impl DiscountBand {
    /// Number of units out of `quantity` that fall inside this band.
    pub fn units_within(&self, quantity: f64) -> f64 {
        if quantity <= self.lower {
            return 0.0;
        }
        let top = match self.upper {
            Some(upper) => quantity.min(upper),
            None => quantity,
        };
        top - self.lower
    }
}

/// Validated, ascending list of contiguous discount bands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountSchedule {
    bands: Vec<DiscountBand>,
}

impl DiscountSchedule {
    /// A schedule with no discounts at all.
    pub fn flat() -> Self {
        Self {
            bands: vec![DiscountBand {
                lower: 0.0,
                upper: None,
                discount: 0.0,
            }],
        }
    }

    /// Builds bands from tiers given in any order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - A threshold is negative or not finite
    /// - A discount is outside [0, 1)
    /// - Two tiers share a threshold
    /// - A higher threshold carries a smaller discount than a lower one
    pub fn try_new(mut tiers: Vec<VolumeDiscountTier>) -> Result<Self, ValidationError> {
        for tier in &tiers {
            if !tier.threshold.is_finite() || tier.threshold < 0.0 {
                return Err(ValidationError::out_of_range(
                    "volume_discounts.threshold",
                    0.0,
                    f64::MAX,
                    tier.threshold,
                ));
            }
            if !tier.discount.is_finite() || !(0.0..1.0).contains(&tier.discount) {
                return Err(ValidationError::out_of_range(
                    "volume_discounts.discount",
                    0.0,
                    1.0,
                    tier.discount,
                ));
            }
        }

        if tiers.is_empty() {
            return Ok(Self::flat());
        }

        tiers.sort_by(|a, b| a.threshold.partial_cmp(&b.threshold).unwrap_or(Ordering::Equal));

        for pair in tiers.windows(2) {
            if pair[0].threshold == pair[1].threshold {
                return Err(ValidationError::duplicate(
                    "volume_discounts.threshold",
                    pair[1].threshold.to_string(),
                ));
            }
            if pair[1].discount < pair[0].discount {
                return Err(ValidationError::invalid_format(
                    "volume_discounts.discount",
                    format!(
                        "discount at threshold {} ({}) is lower than at {} ({})",
                        pair[1].threshold, pair[1].discount, pair[0].threshold, pair[0].discount
                    ),
                ));
            }
        }

        let mut bands = Vec::with_capacity(tiers.len() + 1);
        if tiers[0].threshold > 0.0 {
            bands.push(DiscountBand {
                lower: 0.0,
                upper: Some(tiers[0].threshold),
                discount: 0.0,
            });
        }
        for (i, tier) in tiers.iter().enumerate() {
            bands.push(DiscountBand {
                lower: tier.threshold,
                upper: tiers.get(i + 1).map(|next| next.threshold),
                discount: tier.discount,
            });
        }

        Ok(Self { bands })
    }

    /// Bands in ascending order.
    pub fn bands(&self) -> &[DiscountBand] {
        &self.bands
    }
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        Self::flat()
    }
}
