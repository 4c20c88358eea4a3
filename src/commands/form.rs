//! @acp:module "Form Command"
//! @acp:summary "Interactive estimate form with live totals and export"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Every edit recomputes the estimate from scratch; the form only keeps raw
//! text and the selection.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use super::output::{print_estimate, print_issues};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::estimate::estimate;
use crate::export::{export_to_dir, ExportDocument, ExportFormat, ExportMetadata};
use crate::input::FormState;

const ACTIONS: [&str; 9] = [
    "Property name",
    "Agency name",
    "Floor area (m²)",
    "Hazard area (m²)",
    "Bathrooms",
    "Select work items",
    "Deselect all",
    "Export",
    "Quit",
];

/// Execute the interactive form
pub fn execute_form(catalog: &Catalog, config: &Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut form = FormState::new();

    println!("{} {}\n", style("→").cyan(), style(catalog.title()).bold());

    loop {
        show_estimate(&form, catalog, config);

        let action = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&ACTIONS)
            .default(5)
            .interact()?;

        match action {
            0 => form.property_name = prompt_text(&theme, ACTIONS[0], &form.property_name)?,
            1 => form.agency_name = prompt_text(&theme, ACTIONS[1], &form.agency_name)?,
            2 => form.floor_area = prompt_text(&theme, ACTIONS[2], &form.floor_area)?,
            3 => form.hazard_area = prompt_text(&theme, ACTIONS[3], &form.hazard_area)?,
            4 => form.bathrooms = prompt_text(&theme, ACTIONS[4], &form.bathrooms)?,
            5 => {
                let selectable: Vec<_> = catalog.selectable().collect();
                let labels: Vec<String> = selectable
                    .iter()
                    .map(|item| {
                        let rate = item.rate_description(catalog.currency());
                        format!("{}  {}", item.label, style(rate).dim())
                    })
                    .collect();
                let checked: Vec<bool> = selectable
                    .iter()
                    .map(|item| form.selection.contains(&item.id))
                    .collect();
                let chosen = MultiSelect::with_theme(&theme)
                    .with_prompt("Work items (space to toggle)")
                    .items(&labels)
                    .defaults(&checked)
                    .interact()?;
                apply_selection(&mut form, catalog, &chosen);
            }
            6 => form.selection.clear(),
            7 => export_with_retry(&theme, &form, catalog, config)?,
            _ => break,
        }
        println!();
    }

    Ok(())
}

/// Replace the selectable part of the selection with the chosen indices
/// into [`Catalog::selectable`].
pub fn apply_selection(form: &mut FormState, catalog: &Catalog, chosen: &[usize]) {
    for (index, item) in catalog.selectable().enumerate() {
        if chosen.contains(&index) {
            form.selection.select(&item.id);
        } else {
            form.selection.deselect(&item.id);
        }
    }
}

fn prompt_text(theme: &ColorfulTheme, prompt: &str, current: &str) -> Result<String> {
    Ok(Input::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

fn show_estimate(form: &FormState, catalog: &Catalog, config: &Config) {
    match form.to_input(config.negative_inputs) {
        Ok((input, issues)) => {
            print_issues(&issues);
            print_estimate(catalog, &estimate(catalog, &input));
        }
        Err(e) => eprintln!("{} {}", style("✗").red(), e),
    }
}

fn export_with_retry(
    theme: &ColorfulTheme,
    form: &FormState,
    catalog: &Catalog,
    config: &Config,
) -> Result<()> {
    let (input, _) = match form.to_input(config.negative_inputs) {
        Ok(coerced) => coerced,
        Err(e) => {
            eprintln!("{} Fix the form before exporting: {}", style("✗").red(), e);
            return Ok(());
        }
    };

    let formats: Vec<String> = ExportFormat::ALL.iter().map(|f| f.to_string()).collect();
    let default_format = ExportFormat::ALL
        .iter()
        .position(|f| *f == config.export.format)
        .unwrap_or(0);
    let format = Select::with_theme(theme)
        .with_prompt("Format")
        .items(&formats)
        .default(default_format)
        .interact()?;
    let format = ExportFormat::ALL[format];

    let metadata = ExportMetadata::today(&form.property_name, &form.agency_name);
    let document = ExportDocument::new(catalog, &input, estimate(catalog, &input), metadata);

    loop {
        match export_to_dir(&document, format, &config.export.output_dir) {
            Ok(path) => {
                println!("{} Estimate written to {}", style("✓").green(), path.display());
                return Ok(());
            }
            Err(e) => {
                eprintln!("{} {}", style("✗").red(), e);
                let retry = Confirm::with_theme(theme)
                    .with_prompt("Retry export?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_selection() {
        let catalog = Catalog::builtin();
        let mut form = FormState::new();
        form.selection.select("permessi");

        // indices into the selectable items: 0 = umidita, 2 = tetto
        apply_selection(&mut form, &catalog, &[0, 2]);
        assert!(form.selection.contains("umidita"));
        assert!(form.selection.contains("tetto"));
        assert!(!form.selection.contains("permessi"));
        assert_eq!(form.selection.len(), 2);
    }
}
