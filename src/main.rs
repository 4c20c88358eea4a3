#![forbid(unsafe_code)]
//! Reno Command Line Interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reno::commands::{
    execute_catalog, execute_estimate, execute_export, execute_form, execute_init,
    execute_validate, CatalogOptions, EstimateOptions, ExportOptions, InitOptions, InputOptions,
    ValidateOptions,
};
use reno::config::CONFIG_FILE;
use reno::{Config, ExportFormat, NegativePolicy};

#[derive(Parser)]
#[command(name = "reno")]
#[command(about = "Renovation cost estimator - cost ranges from selected work items")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Catalog file (overrides the configured catalog)
    #[arg(long, global = true, env = "RENO_CATALOG")]
    catalog: Option<PathBuf>,

    /// How to treat negative numbers (overrides the config)
    #[arg(long, global = true, value_enum)]
    negative: Option<NegativeArg>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a reno project configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Write an editable copy of the built-in catalog
        #[arg(long)]
        with_catalog: bool,

        /// Skip interactive prompts (use defaults + CLI args)
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List catalog items and their rates
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute an estimate
    Estimate {
        #[command(flatten)]
        input: InputArgs,

        /// Output as JSON (default: human-readable)
        #[arg(long)]
        json: bool,
    },

    /// Export an estimate document
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Property name
        #[arg(long, default_value = "")]
        property: String,

        /// Agency name
        #[arg(long, default_value = "")]
        agency: String,

        /// Document format: markdown, text, html or json (default: from config)
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Output directory (default: from config)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Date stamp as dd/mm/yyyy (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Validate a catalog file
    Validate {
        /// Catalog file to validate
        file: PathBuf,
    },

    /// Fill in an estimate interactively
    Form,
}

/// Estimator inputs shared by estimate and export
#[derive(Args)]
struct InputArgs {
    /// Work item id to include (repeatable)
    #[arg(short, long = "select")]
    select: Vec<String>,

    /// Floor area in m²
    #[arg(long)]
    area: Option<String>,

    /// Hazardous-material (asbestos) area in m²
    #[arg(long)]
    hazard_area: Option<String>,

    /// Number of bathrooms (default: 1)
    #[arg(long)]
    bathrooms: Option<String>,
}

impl From<InputArgs> for InputOptions {
    fn from(args: InputArgs) -> Self {
        InputOptions {
            select: args.select,
            area: args.area,
            hazard_area: args.hazard_area,
            bathrooms: args.bathrooms,
        }
    }
}

/// Negative input handling
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum NegativeArg {
    Clamp,
    Reject,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(catalog) = cli.catalog {
        config.catalog = Some(catalog);
    }
    if let Some(negative) = cli.negative {
        config.negative_inputs = match negative {
            NegativeArg::Clamp => NegativePolicy::Clamp,
            NegativeArg::Reject => NegativePolicy::Reject,
        };
    }

    match cli.command {
        Commands::Init { force, with_catalog, yes } => {
            let options = InitOptions {
                force,
                with_catalog,
                yes,
                root: PathBuf::from("."),
            };
            execute_init(options)?;
        }

        Commands::Validate { file } => {
            execute_validate(ValidateOptions { file })?;
        }

        Commands::Catalog { json } => {
            let catalog = config.load_catalog()?;
            execute_catalog(CatalogOptions { json }, &catalog)?;
        }

        Commands::Estimate { input, json } => {
            let catalog = config.load_catalog()?;
            let options = EstimateOptions {
                input: input.into(),
                json,
            };
            execute_estimate(options, &catalog, &config)?;
        }

        Commands::Export { input, property, agency, format, output_dir, date } => {
            let catalog = config.load_catalog()?;
            let options = ExportOptions {
                input: input.into(),
                property,
                agency,
                format,
                output_dir,
                date,
            };
            execute_export(options, &catalog, &config)?;
        }

        Commands::Form => {
            let catalog = config.load_catalog()?;
            execute_form(&catalog, &config)?;
        }
    }

    Ok(())
}
