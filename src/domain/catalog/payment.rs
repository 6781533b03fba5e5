//! Payment options and their price multipliers.

use serde::{Deserialize, Serialize};

use super::table::CatalogKey;

/// How the client pays for the engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOption {
    /// Pay as you go, weekly invoices.
    Standard,

    /// Quarter paid up front.
    PrepaidQuarterly,

    /// Year paid up front - best value.
    PrepaidAnnual,
}

impl PaymentOption {
    /// Returns true for prepaid options.
    pub fn is_prepaid(&self) -> bool {
        !matches!(self, PaymentOption::Standard)
    }

    /// Returns the display name for this option.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentOption::Standard => "Standard",
            PaymentOption::PrepaidQuarterly => "Prepaid (quarterly)",
            PaymentOption::PrepaidAnnual => "Prepaid (annual)",
        }
    }
}

impl CatalogKey for PaymentOption {
    const ALL: &'static [Self] = &[
        PaymentOption::Standard,
        PaymentOption::PrepaidQuarterly,
        PaymentOption::PrepaidAnnual,
    ];

    fn key(&self) -> &'static str {
        match self {
            PaymentOption::Standard => "standard",
            PaymentOption::PrepaidQuarterly => "prepaid_quarterly",
            PaymentOption::PrepaidAnnual => "prepaid_annual",
        }
    }

    fn index(&self) -> usize {
        match self {
            PaymentOption::Standard => 0,
            PaymentOption::PrepaidQuarterly => 1,
            PaymentOption::PrepaidAnnual => 2,
        }
    }
}

impl std::fmt::Display for PaymentOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Configured price modifier for a payment option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTerms {
    pub option: PaymentOption,
    pub label: String,
    /// In (0, 1]. 1.0 means no payment discount.
    pub price_multiplier: f64,
}
