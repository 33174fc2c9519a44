//! Catalog configuration: the enumerated lists offered by the forms.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Environment variable naming a JSON catalog file.
pub const CATALOG_ENV: &str = "STOCKROOM_CATALOG";

/// Enumerated categories and suppliers plus analytics knobs.
///
/// Categories are enforced by validation. Suppliers are offered as choices only;
/// the store accepts any non-blank supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogConfig {
    pub categories: Vec<String>,
    pub suppliers: Vec<String>,
    /// How many products the "top by value" ranking returns.
    pub top_products_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            categories: [
                "Electronics",
                "Furniture",
                "Accessories",
                "Office Supplies",
                "Hardware",
                "Software",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            suppliers: [
                "HP Inc.",
                "Logitech",
                "Office Supplies Co.",
                "Dell Technologies",
                "Microsoft",
                "Custom Supplier",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            top_products_limit: 5,
        }
    }
}

impl CatalogConfig {
    pub fn is_known_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn is_listed_supplier(&self, supplier: &str) -> bool {
        self.suppliers.iter().any(|s| s == supplier)
    }

    /// Parse a catalog from JSON. Missing keys fall back to the defaults.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid catalog configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// Load from the file named by `STOCKROOM_CATALOG`, or the defaults when unset.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(CATALOG_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                tracing::info!(path = %path, "loading catalog configuration");
                Self::from_file(path.trim())
            }
            _ => {
                tracing::debug!("{CATALOG_ENV} not set; using default catalog");
                Ok(Self::default())
            }
        }
    }
}
