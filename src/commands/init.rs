//! @acp:module "Init Command"
//! @acp:summary "Initialize a reno project configuration"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `reno init`: writes `.reno.config.json` and, on request, an
//! editable copy of the built-in catalog.

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::catalog::Catalog;
use crate::config::{Config, CONFIG_FILE};
use crate::export::ExportFormat;
use crate::input::NegativePolicy;

/// File name of the editable catalog copy
pub const CATALOG_COPY_FILE: &str = "reno.catalog.json";

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Force overwrite existing config
    pub force: bool,
    /// Write an editable copy of the built-in catalog
    pub with_catalog: bool,
    /// Skip interactive prompts
    pub yes: bool,
    /// Directory to initialize
    pub root: PathBuf,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let config_path = options.root.join(CONFIG_FILE);

    if config_path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let mut config = Config::default();
    let mut with_catalog = options.with_catalog;

    if !options.yes {
        with_catalog = run_interactive_init(&mut config, with_catalog)?;
    }

    if with_catalog {
        let catalog_path = write_catalog_copy(&options.root)?;
        println!("{} Created {}", style("✓").green(), catalog_path.display());
        config.catalog = Some(PathBuf::from(CATALOG_COPY_FILE));
    }

    config.save(&config_path)?;
    println!("{} Created {}", style("✓").green(), config_path.display());

    println!("\n{}", style("Next steps:").bold());
    println!("  1. Run {} to see the work items", style("reno catalog").cyan());
    println!(
        "  2. Run {} to fill in an estimate",
        style("reno form").cyan()
    );

    Ok(())
}

/// Write the built-in catalog into `root` for editing
pub fn write_catalog_copy(root: &Path) -> Result<PathBuf> {
    let path = root.join(CATALOG_COPY_FILE);
    Catalog::builtin().save(&path)?;
    Ok(path)
}

fn run_interactive_init(config: &mut Config, with_catalog: bool) -> Result<bool> {
    let theme = ColorfulTheme::default();
    println!("{} Reno Project Setup\n", style("→").cyan());

    let policies = ["clamp to 0", "reject"];
    let policy = Select::with_theme(&theme)
        .with_prompt("Negative numbers in area/bathroom fields")
        .items(&policies)
        .default(0)
        .interact()?;
    config.negative_inputs = if policy == 0 {
        NegativePolicy::Clamp
    } else {
        NegativePolicy::Reject
    };

    let formats: Vec<String> = ExportFormat::ALL.iter().map(|f| f.to_string()).collect();
    let format = Select::with_theme(&theme)
        .with_prompt("Default export format")
        .items(&formats)
        .default(0)
        .interact()?;
    config.export.format = ExportFormat::ALL[format];

    let output_dir: String = Input::with_theme(&theme)
        .with_prompt("Export directory")
        .default(".".to_string())
        .interact_text()?;
    config.export.output_dir = PathBuf::from(output_dir);

    let copy = Confirm::with_theme(&theme)
        .with_prompt("Write an editable copy of the built-in catalog?")
        .default(with_catalog)
        .interact()?;

    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_non_interactive_init_with_catalog() {
        let dir = TempDir::new().unwrap();
        let options = InitOptions {
            force: false,
            with_catalog: true,
            yes: true,
            root: dir.path().to_path_buf(),
        };
        execute_init(options).unwrap();

        let config = Config::load(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from(CATALOG_COPY_FILE)));
        let copy = Catalog::load(dir.path().join(CATALOG_COPY_FILE)).unwrap();
        assert_eq!(copy, Catalog::builtin());
    }
}
