//! @acp:module "Catalog Types"
//! @acp:summary "Cost item definitions and pricing modes"
//! @acp:domain estimate
//! @acp:layer types

use serde::{Deserialize, Serialize};

use crate::format::format_quantity;

/// How an item's unit bounds combine with the scalar inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Bounds are the cost, independent of any input
    FixedAmount,
    /// Bounds are per square metre of floor area
    PerUnitArea,
    /// Bounds are per square metre of hazardous-material area
    PerHazardUnitArea,
    /// Bounds are per bathroom
    PerBathroom,
}

impl PricingMode {
    /// Items priced on the hazard area are driven by that field, not by
    /// explicit selection
    pub fn is_hazard(self) -> bool {
        matches!(self, PricingMode::PerHazardUnitArea)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PricingMode::FixedAmount => "fixed_amount",
            PricingMode::PerUnitArea => "per_unit_area",
            PricingMode::PerHazardUnitArea => "per_hazard_unit_area",
            PricingMode::PerBathroom => "per_bathroom",
        }
    }
}

impl std::fmt::Display for PricingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// @acp:summary "One renovation work item with its pricing rule"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItemDefinition {
    /// Stable key used for selection membership
    pub id: String,

    /// Display name
    pub label: String,

    pub pricing_mode: PricingMode,

    pub unit_min: f64,

    pub unit_max: f64,
}

impl CostItemDefinition {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        pricing_mode: PricingMode,
        unit_min: f64,
        unit_max: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            pricing_mode,
            unit_min,
            unit_max,
        }
    }

    /// Human-readable rate, e.g. `6 € – 10 € per m²`
    pub fn rate_description(&self, currency: &str) -> String {
        let range = format!(
            "{} {currency} – {} {currency}",
            format_quantity(self.unit_min),
            format_quantity(self.unit_max)
        );
        match self.pricing_mode {
            PricingMode::FixedAmount => range,
            PricingMode::PerBathroom => format!("{} per bathroom", range),
            PricingMode::PerUnitArea | PricingMode::PerHazardUnitArea => {
                format!("{} per m²", range)
            }
        }
    }
}
