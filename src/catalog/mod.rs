//! @acp:module "Catalog"
//! @acp:summary "Validated, ordered catalog of renovation cost items"
//! @acp:domain estimate
//! @acp:layer model
//!
//! A catalog is plain data: the built-in one is embedded at compile time and
//! alternatives load from JSON or YAML files. Every catalog is validated on
//! construction, so the estimator can assume sane bounds.

pub mod types;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use types::{CostItemDefinition, PricingMode};

use crate::error::{RenoError, Result};

const BUILTIN_CATALOG: &str = include_str!("../../catalogs/renovation.json");

/// Largest accepted unit bound. With inputs capped at
/// [`MAX_QUANTITY`](crate::input::MAX_QUANTITY) every line cost stays finite.
pub const MAX_UNIT_COST: f64 = 1.0e9;

fn default_title() -> String {
    "Renovation Cost Estimate".to_string()
}

fn default_currency() -> String {
    "€".to_string()
}

/// On-disk shape of a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    #[serde(default = "default_title")]
    title: String,

    #[serde(default = "default_currency")]
    currency: String,

    items: Vec<CostItemDefinition>,
}

/// @acp:summary "Read-only list of cost items in display order"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    title: String,
    currency: String,
    items: Vec<CostItemDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and malformed bounds
    pub fn new(
        title: impl Into<String>,
        currency: impl Into<String>,
        items: Vec<CostItemDefinition>,
    ) -> Result<Self> {
        validate_items(&items)?;
        Ok(Self {
            title: title.into(),
            currency: currency.into(),
            items,
        })
    }

    /// Catalog with default title and currency
    pub fn from_items(items: Vec<CostItemDefinition>) -> Result<Self> {
        Self::new(default_title(), default_currency(), items)
    }

    /// @acp:summary "The catalog shipped with the binary"
    pub fn builtin() -> Self {
        // The embedded file is covered by tests; failing here is a build defect.
        Self::from_json(BUILTIN_CATALOG).expect("embedded catalog is valid")
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.title, file.currency, file.items)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Self::new(file.title, file.currency, file.items)
    }

    /// @acp:summary "Load a catalog file, format chosen by extension"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml(&content)?,
            _ => return Err(RenoError::UnsupportedCatalogFormat(path.to_path_buf())),
        };
        tracing::debug!(
            "Loaded catalog {} ({} items)",
            path.display(),
            catalog.items.len()
        );
        Ok(catalog)
    }

    /// Save as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = CatalogFile {
            title: self.title.clone(),
            currency: self.currency.clone(),
            items: self.items.clone(),
        };
        std::fs::write(path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn items(&self) -> &[CostItemDefinition] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CostItemDefinition> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Items offered for explicit selection. Hazard-area items are left out
    /// because the hazard field drives them.
    pub fn selectable(&self) -> impl Iterator<Item = &CostItemDefinition> {
        self.items.iter().filter(|item| !item.pricing_mode.is_hazard())
    }

    /// Check that every id names a catalog item
    pub fn check_ids<'a, I>(&self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for id in ids {
            if !self.contains(id) {
                return Err(RenoError::UnknownItem(id.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_items(items: &[CostItemDefinition]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if item.id.trim().is_empty() {
            return Err(RenoError::InvalidCatalog(format!(
                "item {:?} has an empty id",
                item.label
            )));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(RenoError::InvalidCatalog(format!(
                "duplicate item id {:?}",
                item.id
            )));
        }
        for (name, value) in [("unitMin", item.unit_min), ("unitMax", item.unit_max)] {
            if !(0.0..=MAX_UNIT_COST).contains(&value) {
                return Err(RenoError::InvalidCatalog(format!(
                    "item {:?}: {} must be between 0 and {}, got {}",
                    item.id, name, MAX_UNIT_COST, value
                )));
            }
        }
        if item.unit_min > item.unit_max {
            return Err(RenoError::InvalidCatalog(format!(
                "item {:?}: unitMin {} exceeds unitMax {}",
                item.id, item.unit_min, item.unit_max
            )));
        }
    }
    Ok(())
}
