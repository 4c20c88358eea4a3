//! @acp:module "Estimator"
//! @acp:summary "Pure catalog-driven cost range computation"
//! @acp:domain estimate
//! @acp:layer service
//! @acp:stability stable

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CostItemDefinition, PricingMode};
use crate::input::EstimationInput;

/// One visible item with its computed cost range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLine {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
}

/// @acp:summary "Itemized lines and aggregate range"
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub lines: Vec<CostLine>,
    pub total_min: f64,
    pub total_max: f64,
}

impl EstimationResult {
    pub fn line(&self, id: &str) -> Option<&CostLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// An item is visible when selected, or when it is priced on the hazard
/// area and that area is positive.
pub fn is_visible(item: &CostItemDefinition, input: &EstimationInput) -> bool {
    input.selected_ids.contains(&item.id)
        || (item.pricing_mode.is_hazard() && input.hazard_area.is_positive())
}

/// Cost range of a single item for the given inputs
pub fn line_cost(item: &CostItemDefinition, input: &EstimationInput) -> (f64, f64) {
    let factor = match item.pricing_mode {
        PricingMode::FixedAmount => 1.0,
        PricingMode::PerUnitArea => input.floor_area.get(),
        PricingMode::PerHazardUnitArea => input.hazard_area.get(),
        PricingMode::PerBathroom => f64::from(input.bathroom_count),
    };
    (item.unit_min * factor, item.unit_max * factor)
}

/// @acp:summary "Compute the estimate for one input"
///
/// Lines follow catalog order. Selected ids missing from the catalog are
/// ignored.
pub fn estimate(catalog: &Catalog, input: &EstimationInput) -> EstimationResult {
    let lines: Vec<CostLine> = catalog
        .items()
        .iter()
        .filter(|item| is_visible(item, input))
        .map(|item| {
            let (min, max) = line_cost(item, input);
            CostLine {
                id: item.id.clone(),
                label: item.label.clone(),
                min,
                max,
            }
        })
        .collect();

    let total_min: f64 = lines.iter().map(|l| l.min).sum();
    let total_max: f64 = lines.iter().map(|l| l.max).sum();

    tracing::debug!(
        "Estimated {} lines: {} - {}",
        lines.len(),
        total_min,
        total_max
    );

    EstimationResult {
        lines,
        total_min,
        total_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Quantity;

    fn q(v: f64) -> Quantity {
        Quantity::new(v).unwrap()
    }

    #[test]
    fn test_per_unit_area() {
        let catalog = Catalog::from_items(vec![CostItemDefinition::new(
            "floor",
            "Floor",
            PricingMode::PerUnitArea,
            10.0,
            20.0,
        )])
        .unwrap();
        let input = EstimationInput::new()
            .with_selected(["floor"])
            .with_floor_area(q(50.0));

        let result = estimate(&catalog, &input);
        let line = result.line("floor").unwrap();
        assert_eq!((line.min, line.max), (500.0, 1000.0));
    }

    #[test]
    fn test_per_bathroom() {
        let catalog = Catalog::from_items(vec![CostItemDefinition::new(
            "plumbing",
            "Plumbing",
            PricingMode::PerBathroom,
            1000.0,
            1800.0,
        )])
        .unwrap();
        let input = EstimationInput::new()
            .with_selected(["plumbing"])
            .with_bathrooms(2);

        let result = estimate(&catalog, &input);
        assert_eq!((result.total_min, result.total_max), (2000.0, 3600.0));
    }

    #[test]
    fn test_fixed_amount_ignores_scalars() {
        let item = CostItemDefinition::new("p", "Permits", PricingMode::FixedAmount, 500.0, 1500.0);
        let input = EstimationInput::new().with_floor_area(q(999.0)).with_bathrooms(7);
        assert_eq!(line_cost(&item, &input), (500.0, 1500.0));
    }

    #[test]
    fn test_hazard_auto_inclusion() {
        let catalog = Catalog::builtin();
        let input = EstimationInput::new();
        assert!(estimate(&catalog, &input).line("amianto").is_none());

        let input = input.with_hazard_area(q(5.0));
        let line = estimate(&catalog, &input).line("amianto").cloned().unwrap();
        assert_eq!((line.min, line.max), (65.0, 100.0));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let catalog = Catalog::builtin();
        let input = EstimationInput::new().with_selected(["piscina"]);
        assert!(estimate(&catalog, &input).is_empty());
    }
}
