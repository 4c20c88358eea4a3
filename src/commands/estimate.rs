//! @acp:module "Estimate Command"
//! @acp:summary "Compute and print a cost estimate from command-line inputs"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use serde::Serialize;

use super::output::{print_estimate, print_issues};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::estimate::{estimate, EstimationResult};
use crate::input::{EstimationInput, FormState, InputIssue};

/// Raw estimator inputs as typed on the command line
#[derive(Debug, Clone, Default)]
pub struct InputOptions {
    /// Item ids to select
    pub select: Vec<String>,
    /// Floor area text
    pub area: Option<String>,
    /// Hazard area text
    pub hazard_area: Option<String>,
    /// Bathroom count text
    pub bathrooms: Option<String>,
}

impl InputOptions {
    /// Form state with these values filled in over the defaults
    pub fn to_form(&self) -> FormState {
        let mut form = FormState::new();
        for id in &self.select {
            form.selection.select(id);
        }
        if let Some(area) = &self.area {
            form.floor_area = area.clone();
        }
        if let Some(hazard) = &self.hazard_area {
            form.hazard_area = hazard.clone();
        }
        if let Some(bathrooms) = &self.bathrooms {
            form.bathrooms = bathrooms.clone();
        }
        form
    }

    /// Validate ids against the catalog and coerce the scalar fields
    pub fn resolve(
        &self,
        catalog: &Catalog,
        config: &Config,
    ) -> Result<(EstimationInput, Vec<InputIssue>)> {
        catalog.check_ids(self.select.iter().map(String::as_str))?;
        Ok(self.to_form().to_input(config.negative_inputs)?)
    }
}

/// Options for the estimate command
#[derive(Debug, Clone, Default)]
pub struct EstimateOptions {
    pub input: InputOptions,
    /// Output as JSON
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateReport<'a> {
    input: &'a EstimationInput,
    issues: &'a [InputIssue],
    result: &'a EstimationResult,
}

/// Execute the estimate command
pub fn execute_estimate(
    options: EstimateOptions,
    catalog: &Catalog,
    config: &Config,
) -> Result<()> {
    let (input, issues) = options.input.resolve(catalog, config)?;
    let result = estimate(catalog, &input);

    if options.json {
        let report = EstimateReport {
            input: &input,
            issues: &issues,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_issues(&issues);
    print_estimate(catalog, &result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NegativePolicy;

    #[test]
    fn test_resolve_rejects_unknown_item() {
        let options = InputOptions {
            select: vec!["piscina".to_string()],
            ..Default::default()
        };
        let err = options
            .resolve(&Catalog::builtin(), &Config::default())
            .unwrap_err();
        assert!(err.to_string().contains("piscina"));
    }

    #[test]
    fn test_resolve_uses_config_policy() {
        let options = InputOptions {
            area: Some("-20".to_string()),
            ..Default::default()
        };
        let mut config = Config::default();
        let (input, issues) = options.resolve(&Catalog::builtin(), &config).unwrap();
        assert_eq!(input.floor_area.get(), 0.0);
        assert_eq!(issues.len(), 1);

        config.negative_inputs = NegativePolicy::Reject;
        assert!(options.resolve(&Catalog::builtin(), &config).is_err());
    }

    #[test]
    fn test_bathrooms_default_to_one() {
        let form = InputOptions::default().to_form();
        assert_eq!(form.bathrooms, "1");
    }
}
