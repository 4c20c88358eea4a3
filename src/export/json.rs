//! @acp:module "JSON Exporter"
//! @acp:summary "Machine-readable export of the full document"
//! @acp:domain export
//! @acp:layer output

use super::{ExportDocument, ExportFormat, Exporter};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, document: &ExportDocument) -> Result<String> {
        Ok(serde_json::to_string_pretty(document)?)
    }
}
