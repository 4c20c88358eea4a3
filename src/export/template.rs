//! @acp:module "Template Exporter"
//! @acp:summary "Handlebars-rendered Markdown, text and HTML documents"
//! @acp:domain export
//! @acp:layer output

use handlebars::Handlebars;
use serde::Serialize;

use super::{non_blank, ExportDocument, ExportFormat, Exporter, NOT_SPECIFIED};
use crate::error::{RenoError, Result};
use crate::format::{format_amount, format_quantity};

const MARKDOWN_TEMPLATE: &str = include_str!("../../templates/estimate.md.hbs");
const TEXT_TEMPLATE: &str = include_str!("../../templates/estimate.txt.hbs");
const HTML_TEMPLATE: &str = include_str!("../../templates/estimate.html.hbs");

const TEMPLATE_NAME: &str = "estimate";

/// Pre-formatted values handed to the templates
#[derive(Debug, Serialize)]
struct DocumentView<'a> {
    title: &'a str,
    date: String,
    property: &'a str,
    agency: &'a str,
    floor_area: String,
    hazard_area: String,
    bathrooms: u32,
    lines: Vec<LineView<'a>>,
    total_min: String,
    total_max: String,
}

#[derive(Debug, Serialize)]
struct LineView<'a> {
    label: &'a str,
    min: String,
    max: String,
}

impl<'a> DocumentView<'a> {
    fn from_document(doc: &'a ExportDocument) -> Self {
        let currency = doc.currency.as_str();
        Self {
            title: &doc.title,
            date: doc.metadata.date_stamp(),
            property: non_blank(&doc.metadata.property_name).unwrap_or(NOT_SPECIFIED),
            agency: non_blank(&doc.metadata.agency_name).unwrap_or(NOT_SPECIFIED),
            floor_area: format_quantity(doc.floor_area),
            hazard_area: format_quantity(doc.hazard_area),
            bathrooms: doc.bathroom_count,
            lines: doc
                .result
                .lines
                .iter()
                .map(|line| LineView {
                    label: &line.label,
                    min: format_amount(line.min, currency),
                    max: format_amount(line.max, currency),
                })
                .collect(),
            total_min: format_amount(doc.result.total_min, currency),
            total_max: format_amount(doc.result.total_max, currency),
        }
    }
}

/// @acp:summary "Exporter backed by one embedded Handlebars template"
pub struct TemplateExporter {
    format: ExportFormat,
    registry: Handlebars<'static>,
}

impl TemplateExporter {
    pub fn new(format: ExportFormat) -> Result<Self> {
        let source = match format {
            ExportFormat::Markdown => MARKDOWN_TEMPLATE,
            ExportFormat::Text => TEXT_TEMPLATE,
            ExportFormat::Html => HTML_TEMPLATE,
            ExportFormat::Json => {
                return Err(RenoError::ExportFailure(
                    "json is not a template format".to_string(),
                ))
            }
        };
        Self::with_template(format, source)
    }

    /// Use a custom template for `format`
    pub fn with_template(format: ExportFormat, source: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        if format != ExportFormat::Html {
            registry.register_escape_fn(handlebars::no_escape);
        }
        registry
            .register_template_string(TEMPLATE_NAME, source)
            .map_err(RenoError::export)?;
        Ok(Self { format, registry })
    }
}

impl Exporter for TemplateExporter {
    fn format(&self) -> ExportFormat {
        self.format
    }

    fn render(&self, document: &ExportDocument) -> Result<String> {
        let view = DocumentView::from_document(document);
        self.registry
            .render(TEMPLATE_NAME, &view)
            .map_err(RenoError::export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{CostLine, EstimationResult};
    use crate::export::ExportMetadata;
    use chrono::NaiveDate;

    fn document() -> ExportDocument {
        ExportDocument {
            title: "Renovation Estimate".to_string(),
            currency: "€".to_string(),
            metadata: ExportMetadata::new(
                "Villa <Rosa>",
                "",
                NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            ),
            floor_area: 80.0,
            hazard_area: 0.0,
            bathroom_count: 1,
            result: EstimationResult {
                lines: vec![CostLine {
                    id: "tetto".to_string(),
                    label: "Roof replacement".to_string(),
                    min: 1440.0,
                    max: 2720.0,
                }],
                total_min: 1440.0,
                total_max: 2720.0,
            },
        }
    }

    #[test]
    fn test_markdown_render() {
        let out = TemplateExporter::new(ExportFormat::Markdown)
            .unwrap()
            .render(&document())
            .unwrap();
        assert!(out.contains("# Renovation Estimate"));
        assert!(out.contains("19/10/2026"));
        assert!(out.contains("**Floor area:** 80 m²"));
        assert!(out.contains("Villa <Rosa>"));
        assert!(out.contains("(not specified)"));
        assert!(out.contains("| Roof replacement | 1440 € | 2720 € |"));
        assert!(out.contains("1440 € – 2720 €"));
    }

    #[test]
    fn test_html_escapes_names() {
        let out = TemplateExporter::new(ExportFormat::Html)
            .unwrap()
            .render(&document())
            .unwrap();
        assert!(out.contains("Villa &lt;Rosa&gt;"));
        assert!(!out.contains("Villa <Rosa>"));
    }

    #[test]
    fn test_empty_estimate_message() {
        let mut doc = document();
        doc.result = EstimationResult::default();
        let out = TemplateExporter::new(ExportFormat::Text)
            .unwrap()
            .render(&doc)
            .unwrap();
        assert!(out.contains("No work items selected."));
    }

    #[test]
    fn test_bad_custom_template() {
        assert!(TemplateExporter::with_template(ExportFormat::Text, "{{#each}").is_err());
    }
}
