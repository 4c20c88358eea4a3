//! Export integration tests
//!
//! Tests for document rendering, file naming and catalog/config files on disk.

use chrono::NaiveDate;
use tempfile::TempDir;

use reno::input::MAX_QUANTITY;
use reno::{
    estimate, export_file_name, export_to_dir, exporter_for, Catalog, Config, EstimationInput,
    ExportDocument, ExportFormat, ExportMetadata, Quantity, RenoError,
};

fn document(property: &str, agency: &str) -> ExportDocument {
    let catalog = Catalog::builtin();
    let input = EstimationInput::new()
        .with_selected(["tetto", "permessi"])
        .with_floor_area(Quantity::new(95.0).unwrap())
        .with_hazard_area(Quantity::new(30.0).unwrap());
    let result = estimate(&catalog, &input);
    let metadata = ExportMetadata::new(
        property,
        agency,
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
    );
    ExportDocument::new(&catalog, &input, result, metadata)
}

// =============================================================================
// Document Rendering
// =============================================================================

mod render_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_document() {
        let out = exporter_for(ExportFormat::Markdown)
            .unwrap()
            .render(&document("Villa Rosa", "Casa Nostra"))
            .unwrap();

        assert!(out.starts_with("# Renovation Cost Estimate"));
        assert!(out.contains("**Date:** 19/10/2026"));
        assert!(out.contains("**Property:** Villa Rosa"));
        assert!(out.contains("**Agency:** Casa Nostra"));
        assert!(out.contains("**Floor area:** 95 m²"));
        assert!(out.contains("**Hazard area:** 30 m²"));
        assert!(out.contains("| Roof replacement | 1710 € | 3230 € |"));
        assert!(out.contains("| Asbestos removal (roof) | 390 € | 600 € |"));
        assert!(out.contains("| Permits and paperwork | 500 € | 1500 € |"));
        assert!(out.contains("**Estimated total: 2600 € – 5330 €**"));
    }

    #[test]
    fn test_text_document_placeholders() {
        let out = exporter_for(ExportFormat::Text)
            .unwrap()
            .render(&document("", ""))
            .unwrap();
        assert!(out.contains("Property:     (not specified)"));
        assert!(out.contains("Agency:       (not specified)"));
        assert!(out.contains("Estimated total: 2600 € – 5330 €"));
    }

    #[test]
    fn test_html_document() {
        let out = exporter_for(ExportFormat::Html)
            .unwrap()
            .render(&document("Villa Rosa", "Casa Nostra"))
            .unwrap();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<td>Roof replacement</td>"));
        assert!(out.contains("Estimated total: 2600 € – 5330 €"));
    }

    #[test]
    fn test_json_document_round_trips() {
        let doc = document("Villa Rosa", "Casa Nostra");
        let out = exporter_for(ExportFormat::Json).unwrap().render(&doc).unwrap();
        let parsed: ExportDocument = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, doc);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["metadata"]["date"], "2026-10-19");
        assert_eq!(value["result"]["totalMin"], 2600.0);
    }
}

// =============================================================================
// Writing Files
// =============================================================================

mod file_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_to_dir_writes_named_file() {
        let dir = TempDir::new().unwrap();
        let doc = document("Villa Rosa", "Casa Nostra");

        let path = export_to_dir(&doc, ExportFormat::Markdown, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("villa_rosa_casa_nostra.md"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Villa Rosa"));
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("exports").join("2026");
        let path = export_to_dir(&document("", ""), ExportFormat::Json, &nested).unwrap();
        assert_eq!(path, nested.join("property_agency.json"));
        assert!(path.exists());
    }

    #[test]
    fn test_export_failure_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        // a regular file where the output directory should be
        let blocker = dir.path().join("out");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = export_to_dir(&document("a", "b"), ExportFormat::Text, &blocker).unwrap_err();
        assert!(matches!(err, RenoError::ExportFailure(_)));
        assert!(!dir.path().join("out").join("a_b.txt").exists());
    }

    #[test]
    fn test_json_export_at_largest_input_reads_back() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let largest = Quantity::new(MAX_QUANTITY).unwrap();
        let input = EstimationInput::new()
            .with_selected(["infissi", "pavimenti"])
            .with_floor_area(largest)
            .with_hazard_area(largest);
        let result = estimate(&catalog, &input);
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let metadata = ExportMetadata::new("Big", "Lot", date);
        let doc = ExportDocument::new(&catalog, &input, result, metadata);

        let path = export_to_dir(&doc, ExportFormat::Json, dir.path()).unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        let read_back: ExportDocument = serde_json::from_str(&written).unwrap();
        assert_eq!(read_back, doc);

        let markdown = exporter_for(ExportFormat::Markdown).unwrap().render(&doc).unwrap();
        assert!(markdown.contains("| Windows and doors | 20000000000 € | 40000000000 € |"));
    }

    #[test]
    fn test_file_name_per_format() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let meta = ExportMetadata::new("Casa al Mare", "", date);
        let names: Vec<String> = ExportFormat::ALL
            .iter()
            .map(|f| export_file_name(&meta, *f))
            .collect();
        assert_eq!(
            names,
            vec![
                "casa_al_mare_agency.md",
                "casa_al_mare_agency.txt",
                "casa_al_mare_agency.html",
                "casa_al_mare_agency.json",
            ]
        );
    }
}

// =============================================================================
// Catalog and Config Files
// =============================================================================

mod config_file_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        Catalog::builtin().save(&path).unwrap();
        assert_eq!(Catalog::load(&path).unwrap(), Catalog::builtin());
    }

    #[test]
    fn test_yaml_catalog_via_config() {
        let dir = TempDir::new().unwrap();
        let catalog_path = dir.path().join("bagno.yaml");
        std::fs::write(
            &catalog_path,
            r#"
title: Bathroom refit
currency: "$"
items:
  - id: tiles
    label: Tiles
    pricingMode: per_unit_area
    unitMin: 40
    unitMax: 90
  - id: fixtures
    label: Fixtures
    pricingMode: per_bathroom
    unitMin: 800
    unitMax: 2500
"#,
        )
        .unwrap();

        let config = Config {
            catalog: Some(catalog_path),
            ..Config::default()
        };
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.title(), "Bathroom refit");
        assert_eq!(catalog.currency(), "$");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_invalid_catalog_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"items":[{"id":"x","label":"X","pricingMode":"fixed_amount","unitMin":9,"unitMax":3}]}"#,
        )
        .unwrap();
        assert!(matches!(Catalog::load(&path), Err(RenoError::InvalidCatalog(_))));
    }

    #[test]
    fn test_unsupported_catalog_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            Catalog::load(&path),
            Err(RenoError::UnsupportedCatalogFormat(_))
        ));
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".reno.config.json");
        let mut config = Config::default();
        config.export.format = ExportFormat::Html;
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
