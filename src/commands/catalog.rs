//! @acp:module "Catalog Command"
//! @acp:summary "List catalog items with their rates"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::catalog::Catalog;

/// Options for the catalog command
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    /// Output as JSON
    pub json: bool,
}

/// Execute the catalog command
pub fn execute_catalog(options: CatalogOptions, catalog: &Catalog) -> Result<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(catalog.items())?);
        return Ok(());
    }

    println!("{}", style(catalog.title()).bold());
    let id_width = catalog.items().iter().map(|i| i.id.len()).max().unwrap_or(0);
    for item in catalog.items() {
        let auto = if item.pricing_mode.is_hazard() {
            format!(" {}", style("(auto when hazard area > 0)").dim())
        } else {
            String::new()
        };
        println!(
            "  {:<width$}  {}",
            style(&item.id).cyan(),
            item.label,
            width = id_width
        );
        println!(
            "  {:<width$}  {}{}",
            "",
            style(item.rate_description(catalog.currency())).dim(),
            auto,
            width = id_width
        );
    }
    println!("\n  Items: {}", catalog.len());

    Ok(())
}
