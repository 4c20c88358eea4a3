//! @acp:module "Export"
//! @acp:summary "Render an estimate with its metadata into a document file"
//! @acp:domain export
//! @acp:layer output
//!
//! The estimator knows nothing about documents. An [`ExportDocument`] bundles
//! the result with display-only metadata, and an [`Exporter`] turns it into
//! text in one [`ExportFormat`].

pub mod json;
pub mod template;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{RenoError, Result};
use crate::estimate::EstimationResult;
use crate::input::EstimationInput;

pub use json::JsonExporter;
pub use template::TemplateExporter;

/// Date stamp format used in documents
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Placeholder for blank property/agency names
pub const NOT_SPECIFIED: &str = "(not specified)";

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Text,
    Html,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Markdown,
        ExportFormat::Text,
        ExportFormat::Html,
        ExportFormat::Json,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = RenoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "text" | "txt" => Ok(ExportFormat::Text),
            "html" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            _ => Err(RenoError::UnknownExportFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExportFormat::Markdown => "markdown",
            ExportFormat::Text => "text",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Display-only metadata; carries no computational meaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub property_name: String,
    pub agency_name: String,
    pub date: NaiveDate,
}

impl ExportMetadata {
    pub fn new(
        property_name: impl Into<String>,
        agency_name: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            agency_name: agency_name.into(),
            date,
        }
    }

    /// Metadata stamped with today's local date
    pub fn today(property_name: impl Into<String>, agency_name: impl Into<String>) -> Self {
        Self::new(property_name, agency_name, chrono::Local::now().date_naive())
    }

    pub fn date_stamp(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// @acp:summary "Everything an exporter needs, nothing it has to compute"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub title: String,
    pub currency: String,
    pub metadata: ExportMetadata,
    pub floor_area: f64,
    pub hazard_area: f64,
    pub bathroom_count: u32,
    pub result: EstimationResult,
}

impl ExportDocument {
    pub fn new(
        catalog: &Catalog,
        input: &EstimationInput,
        result: EstimationResult,
        metadata: ExportMetadata,
    ) -> Self {
        Self {
            title: catalog.title().to_string(),
            currency: catalog.currency().to_string(),
            metadata,
            floor_area: input.floor_area.get(),
            hazard_area: input.hazard_area.get(),
            bathroom_count: input.bathroom_count,
            result,
        }
    }
}

/// @acp:summary "Turns an export document into text of one format"
pub trait Exporter {
    fn format(&self) -> ExportFormat;

    fn render(&self, document: &ExportDocument) -> Result<String>;
}

/// Exporter for a format
pub fn exporter_for(format: ExportFormat) -> Result<Box<dyn Exporter>> {
    Ok(match format {
        ExportFormat::Json => Box::new(JsonExporter),
        other => Box::new(TemplateExporter::new(other)?),
    })
}

/// File name derived from the property and agency names.
///
/// Blank names fall back to `property` / `agency`; whitespace runs become
/// `_`, the result is lowercased and path-hostile characters are dropped.
pub fn export_file_name(metadata: &ExportMetadata, format: ExportFormat) -> String {
    let property = non_blank(&metadata.property_name).unwrap_or("property");
    let agency = non_blank(&metadata.agency_name).unwrap_or("agency");
    let stem = format!("{}_{}", property, agency)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect::<String>();
    format!("{}.{}", stem, format.extension())
}

pub(crate) fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// @acp:summary "Render and write a document into a directory"
///
/// Returns the written path. Any failure is an [`RenoError::ExportFailure`]
/// and leaves no file behind.
pub fn export_to_dir(
    document: &ExportDocument,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf> {
    let exporter = exporter_for(format).map_err(RenoError::export)?;
    let content = exporter.render(document).map_err(RenoError::export)?;

    std::fs::create_dir_all(dir).map_err(|e| {
        RenoError::ExportFailure(format!("cannot create {}: {}", dir.display(), e))
    })?;
    let path = dir.join(export_file_name(&document.metadata, format));
    std::fs::write(&path, content).map_err(|e| {
        RenoError::ExportFailure(format!("cannot write {}: {}", path.display(), e))
    })?;

    tracing::debug!("Exported {} document to {}", exporter.format(), path.display());
    Ok(path)
}
