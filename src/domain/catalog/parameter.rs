//! Optional service parameters (add-ons) and their cost rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ceil_stable, ParameterId, ValidationError};

/// How an add-on's cost is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    /// Flat number of work units per week.
    Absolute,

    /// Percentage of the tier's base weekly capacity, rounded up.
    Relative,
}

/// Weekly work-unit cost attached to an add-on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRule {
    pub kind: CostKind,
    pub value: f64,
}

impl CostRule {
    /// Creates a flat-cost rule.
    pub fn absolute(value: f64) -> Self {
        Self {
            kind: CostKind::Absolute,
            value,
        }
    }

    /// Creates a percentage-of-capacity rule.
    pub fn relative(value: f64) -> Self {
        Self {
            kind: CostKind::Relative,
            value,
        }
    }

    /// Work units this rule adds on top of `base_capacity`.
    pub fn surcharge(&self, base_capacity: f64) -> f64 {
        match self.kind {
            CostKind::Absolute => self.value,
            CostKind::Relative => ceil_stable(base_capacity * self.value / 100.0),
        }
    }
}

/// A toggleable add-on offered next to the module catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceParameter {
    pub id: ParameterId,
    pub label: String,
    #[serde(default)]
    pub default_enabled: bool,
    /// Parameters without a cost rule are presentation-only.
    #[serde(default)]
    pub cost: Option<CostRule>,
}

impl ServiceParameter {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::empty_field(format!(
                "parameters.{}.label",
                self.id
            )));
        }
        if let Some(rule) = &self.cost {
            if !rule.value.is_finite() || rule.value < 0.0 {
                return Err(ValidationError::out_of_range(
                    format!("parameters.{}.cost.value", self.id),
                    0.0,
                    f64::MAX,
                    rule.value,
                ));
            }
        }
        Ok(())
    }
}
