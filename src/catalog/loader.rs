use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Catalog;
use crate::models::CatalogEntry;

/// Load a catalog from a JSON file holding an array of entries
///
/// ```json
/// [
///   {"name": "milk", "category": "Dairy", "price": 3.99, "alternatives": ["oat milk"]},
///   {"name": "apples", "category": "Produce", "price": 1.99, "seasonal": true}
/// ]
/// ```
///
/// Array order becomes catalog order. `alternatives` and `seasonal` are optional.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let entries: Vec<CatalogEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog JSON: {}", path.display()))?;
    let catalog = Catalog::from_entries(entries)
        .with_context(|| format!("Invalid catalog: {}", path.display()))?;

    tracing::info!(path = %path.display(), entries = catalog.len(), "loaded catalog");
    Ok(catalog)
}
