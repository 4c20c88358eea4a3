#![forbid(unsafe_code)]

//! @acp:module "Reno Library"
//! @acp:summary "Catalog-driven renovation cost estimation with document export"
//! @acp:domain estimate
//! @acp:layer api
//! @acp:stability stable
//!
//! # Reno - Renovation Cost Estimator
//!
//! Estimates renovation cost ranges for a property from selected work items
//! and a few scalar inputs, then exports the estimate as a document.
//!
//! ## Features
//!
//! - **Catalog-driven**: pricing tables are data (JSON or YAML)
//! - **Pure estimator**: `estimate(catalog, input)` has no hidden state
//! - **Forgiving input**: half-typed numbers coerce to zero and are flagged
//! - **Export**: Markdown, text, HTML and JSON documents
//!
//! ## Example
//!
//! ```rust,no_run
//! use reno::{estimate, Catalog, FormState, NegativePolicy};
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = Catalog::builtin();
//!
//!     let mut form = FormState::new();
//!     form.floor_area = "120".to_string();
//!     form.selection.toggle("tetto");
//!
//!     let (input, issues) = form.to_input(NegativePolicy::Clamp)?;
//!     let result = estimate(&catalog, &input);
//!     println!("{} - {} ({} issues)", result.total_min, result.total_max, issues.len());
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod estimate;
pub mod export;
pub mod format;
pub mod input;

// Re-exports
pub use catalog::{Catalog, CostItemDefinition, PricingMode};
pub use config::Config;
pub use error::{RenoError, Result};
pub use estimate::{estimate, CostLine, EstimationResult};
pub use export::{
    export_file_name, export_to_dir, exporter_for, ExportDocument, ExportFormat, ExportMetadata,
    Exporter,
};
pub use input::{
    EstimationInput, FormState, InputIssue, IssueKind, NegativePolicy, Quantity, Selection,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
