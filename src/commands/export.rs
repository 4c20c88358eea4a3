//! @acp:module "Export Command"
//! @acp:summary "Write an estimate document to disk"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use console::style;

use super::estimate::InputOptions;
use super::output::print_issues;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::estimate::estimate;
use crate::export::{export_to_dir, ExportDocument, ExportFormat, ExportMetadata, DATE_FORMAT};

/// Options for the export command
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub input: InputOptions,
    /// Property name (display only)
    pub property: String,
    /// Agency name (display only)
    pub agency: String,
    /// Format override; config default when absent
    pub format: Option<ExportFormat>,
    /// Output directory override; config default when absent
    pub output_dir: Option<PathBuf>,
    /// Date stamp as `dd/mm/yyyy`; today when absent
    pub date: Option<String>,
}

/// Execute the export command
pub fn execute_export(
    options: ExportOptions,
    catalog: &Catalog,
    config: &Config,
) -> Result<PathBuf> {
    let (input, issues) = options.input.resolve(catalog, config)?;
    print_issues(&issues);

    let metadata = match &options.date {
        Some(date) => {
            let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
                .with_context(|| format!("invalid date {:?}, expected dd/mm/yyyy", date))?;
            ExportMetadata::new(&options.property, &options.agency, date)
        }
        None => ExportMetadata::today(&options.property, &options.agency),
    };

    let result = estimate(catalog, &input);
    let document = ExportDocument::new(catalog, &input, result, metadata);

    let format = options.format.unwrap_or(config.export.format);
    let dir = options
        .output_dir
        .unwrap_or_else(|| config.export.output_dir.clone());

    println!("{} Exporting {} document...", style("→").cyan(), format);
    let path = export_to_dir(&document, format, &dir)?;
    println!("{} Estimate written to {}", style("✓").green(), path.display());

    Ok(path)
}
