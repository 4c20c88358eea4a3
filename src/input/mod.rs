//! @acp:module "Estimation Input"
//! @acp:summary "Selection set, scalar inputs and the raw form state they come from"
//! @acp:domain estimate
//! @acp:layer model
//!
//! [`EstimationInput`] is the value object the estimator consumes.
//! [`FormState`] holds what a user is typing, including half-finished
//! numbers, and converts into an input plus a list of [`InputIssue`]s.

pub mod coerce;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use coerce::{
    coerce_count, coerce_quantity, parse_number, InputIssue, IssueKind, NegativePolicy, Quantity,
    MAX_QUANTITY,
};

use crate::error::Result;

pub const FLOOR_AREA_FIELD: &str = "floor area";
pub const HAZARD_AREA_FIELD: &str = "hazard area";
pub const BATHROOMS_FIELD: &str = "bathrooms";

/// @acp:summary "Set of selected item ids"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeSet<String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership; returns whether the id is selected afterwards
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.to_string());
            true
        }
    }

    /// Returns false if the id was already selected
    pub fn select(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string())
    }

    /// Returns false if the id was not selected
    pub fn deselect(&mut self, id: &str) -> bool {
        self.0.remove(id)
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Selection(iter.into_iter().map(Into::into).collect())
    }
}

/// @acp:summary "Plain inputs to a single estimate"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationInput {
    pub selected_ids: Selection,

    /// Floor area in square metres
    pub floor_area: Quantity,

    /// Hazardous-material (asbestos) area in square metres
    pub hazard_area: Quantity,

    pub bathroom_count: u32,
}

impl Default for EstimationInput {
    fn default() -> Self {
        Self {
            selected_ids: Selection::new(),
            floor_area: Quantity::ZERO,
            hazard_area: Quantity::ZERO,
            bathroom_count: 1,
        }
    }
}

impl EstimationInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selected<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_ids = ids.into_iter().collect();
        self
    }

    pub fn with_floor_area(mut self, area: Quantity) -> Self {
        self.floor_area = area;
        self
    }

    pub fn with_hazard_area(mut self, area: Quantity) -> Self {
        self.hazard_area = area;
        self
    }

    pub fn with_bathrooms(mut self, count: u32) -> Self {
        self.bathroom_count = count;
        self
    }
}

/// @acp:summary "Raw, user-editable form fields"
///
/// Numeric fields stay as text so a user can type freely; nothing is
/// validated until [`FormState::to_input`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub property_name: String,
    pub agency_name: String,
    pub floor_area: String,
    pub hazard_area: String,
    pub bathrooms: String,
    pub selection: Selection,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            property_name: String::new(),
            agency_name: String::new(),
            floor_area: String::new(),
            hazard_area: String::new(),
            bathrooms: "1".to_string(),
            selection: Selection::new(),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coerce the form into an estimator input.
    ///
    /// Malformed numbers never fail; they become zero and are listed in the
    /// returned issues. Negative numbers follow `policy`.
    pub fn to_input(&self, policy: NegativePolicy) -> Result<(EstimationInput, Vec<InputIssue>)> {
        let mut issues = Vec::new();
        let floor_area = coerce_quantity(FLOOR_AREA_FIELD, &self.floor_area, policy, &mut issues)?;
        let hazard_area =
            coerce_quantity(HAZARD_AREA_FIELD, &self.hazard_area, policy, &mut issues)?;
        let bathroom_count = coerce_count(BATHROOMS_FIELD, &self.bathrooms, policy, &mut issues)?;

        let input = EstimationInput {
            selected_ids: self.selection.clone(),
            floor_area,
            hazard_area,
            bathroom_count,
        };
        Ok((input, issues))
    }
}
