//! @acp:module "Validate Command"
//! @acp:summary "Validate a catalog file"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::catalog::{Catalog, PricingMode};

/// Options for the validate command
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// File to validate
    pub file: PathBuf,
}

/// Execute the validate command
pub fn execute_validate(options: ValidateOptions) -> Result<()> {
    let catalog = match Catalog::load(&options.file) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!(
                "{} {} is not a valid catalog: {}",
                style("✗").red(),
                options.file.display(),
                e
            );
            std::process::exit(1);
        }
    };

    println!(
        "{} {} is a valid catalog",
        style("✓").green(),
        options.file.display()
    );
    println!("  Title: {}", catalog.title());
    println!("  Items: {}", catalog.len());
    for mode in [
        PricingMode::FixedAmount,
        PricingMode::PerUnitArea,
        PricingMode::PerHazardUnitArea,
        PricingMode::PerBathroom,
    ] {
        let count = catalog
            .items()
            .iter()
            .filter(|i| i.pricing_mode == mode)
            .count();
        if count > 0 {
            println!("    {}: {}", mode, count);
        }
    }

    Ok(())
}
