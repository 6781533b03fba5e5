//! Consulting modules and their engagement variants.

use serde::{Deserialize, Serialize};

use super::EngagementType;
use crate::domain::foundation::{ModuleId, ValidationError};

/// An engagement-depth option for a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub engagement: EngagementType,
    /// Work units (EVC) consumed by this variant.
    pub work_units: f64,
    /// Marks a module that is only offered in this one variant.
    #[serde(default)]
    pub single_variant: bool,
}

impl Variant {
    pub fn new(engagement: EngagementType, work_units: f64) -> Self {
        Self {
            engagement,
            work_units,
            single_variant: false,
        }
    }
}

/// A module as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleCatalogEntry {
    pub id: ModuleId,
    pub name: String,
    /// Category tag used to group modules in presentations.
    pub pillar: String,
    /// Ordered variants. The first one is the default.
    pub variants: Vec<Variant>,
}

impl ModuleCatalogEntry {
    /// The variant used when none has been chosen explicitly.
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }

    /// Finds the variant for an engagement type.
    pub fn variant(&self, engagement: EngagementType) -> Option<&Variant> {
        self.variants.iter().find(|v| v.engagement == engagement)
    }

    /// Returns true if the module is offered in a single variant only.
    pub fn is_single_variant(&self) -> bool {
        self.variants.len() == 1 && self.variants[0].single_variant
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        let field = |name: &str| format!("modules.{}.{}", self.id, name);

        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field(field("name")));
        }
        if self.pillar.trim().is_empty() {
            return Err(ValidationError::empty_field(field("pillar")));
        }
        if self.variants.is_empty() {
            return Err(ValidationError::empty_field(field("variants")));
        }

        for (i, variant) in self.variants.iter().enumerate() {
            if !variant.work_units.is_finite() || variant.work_units < 0.0 {
                return Err(ValidationError::out_of_range(
                    field("variants.work_units"),
                    0.0,
                    f64::MAX,
                    variant.work_units,
                ));
            }
            if self.variants[..i].iter().any(|v| v.engagement == variant.engagement) {
                return Err(ValidationError::duplicate(
                    field("variants"),
                    variant.engagement.to_string(),
                ));
            }
            if variant.single_variant && self.variants.len() > 1 {
                return Err(ValidationError::invalid_format(
                    field("variants"),
                    "single_variant is only allowed on modules with one variant",
                ));
            }
        }

        Ok(())
    }
}
