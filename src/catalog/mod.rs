//! Product catalog: the static lookup table standing in for a pricing service.
//!
//! Entries keep their load order, which is the order search results and seasonal
//! suggestions are produced in. Lookup is by canonical (lowercase, trimmed) name.
//!
//! A catalog is either the built-in [`Catalog::reference`] table or loaded from a JSON
//! file with [`load_catalog`].

pub mod loader;
pub mod reference;

use std::collections::HashMap;

use anyhow::{Result, bail};

pub use loader::load_catalog;

use crate::models::CatalogEntry;
use crate::utils::canonical_name;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from entries, canonicalizing names
    ///
    /// Rejects empty names, duplicate names and negative or non-finite prices.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut catalog = Self::default();

        for mut entry in entries {
            entry.name = canonical_name(&entry.name);
            if entry.name.is_empty() {
                bail!("Catalog entry name cannot be empty");
            }
            if !entry.unit_price.is_finite() || entry.unit_price < 0.0 {
                bail!("Invalid price for '{}': {} (must be non-negative)", entry.name, entry.unit_price);
            }
            if catalog.by_name.contains_key(&entry.name) {
                bail!("Duplicate catalog entry: '{}'", entry.name);
            }
            entry.alternatives = entry
                .alternatives
                .iter()
                .map(|alt| canonical_name(alt))
                .filter(|alt| !alt.is_empty())
                .collect();

            catalog.by_name.insert(entry.name.clone(), catalog.entries.len());
            catalog.entries.push(entry);
        }

        Ok(catalog)
    }

    /// Look up an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.by_name.get(&canonical_name(name)).map(|&idx| &self.entries[idx])
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Seasonal entries in catalog order
    pub fn seasonal(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|entry| entry.seasonal)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
