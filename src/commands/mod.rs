//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod catalog;
pub mod estimate;
pub mod export;
pub mod form;
pub mod init;
pub mod output;
pub mod validate;

pub use catalog::{execute_catalog, CatalogOptions};
pub use estimate::{execute_estimate, EstimateOptions, InputOptions};
pub use export::{execute_export, ExportOptions};
pub use form::execute_form;
pub use init::{execute_init, InitOptions};
pub use output::{print_estimate, print_issues, render_estimate_table};
pub use validate::{execute_validate, ValidateOptions};
