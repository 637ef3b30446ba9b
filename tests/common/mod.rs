//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use shopping_voice::assistant::Assistant;
use shopping_voice::catalog::Catalog;
use shopping_voice::engine::{AdvisoryQueue, FixedSource, ListEngine, SuggestionEngine};
use tempfile::TempDir;

/// Purchase history the assistant ships with
pub const DEFAULT_HISTORY: [&str; 5] = ["milk", "bread", "eggs", "apples", "chicken"];

/// Builder for a temp directory holding catalog and config files
pub struct WorkspaceBuilder {
    temp_dir: TempDir,
}

impl WorkspaceBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.temp_dir.path().join("catalog.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.json")
    }

    /// A config path that does not exist, so defaults apply
    pub fn missing_config_path(&self) -> PathBuf {
        self.temp_dir.path().join("absent").join("config.json")
    }

    /// Write catalog.json with the given raw content
    pub fn with_catalog_json(self, content: &str) -> Self {
        fs::write(self.catalog_path(), content).expect("Failed to write catalog.json");
        self
    }

    /// Write catalog.json from entry builders
    pub fn with_catalog(self, entries: &[CatalogEntryBuilder]) -> Self {
        let content = Value::Array(entries.iter().map(|e| e.to_json()).collect());
        self.with_catalog_json(&content.to_string())
    }

    /// Write config.json with the given raw content
    pub fn with_config_json(self, content: &str) -> Self {
        fs::write(self.config_path(), content).expect("Failed to write config.json");
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

/// Builder for one catalog entry in JSON form
pub struct CatalogEntryBuilder {
    name: String,
    category: String,
    price: f64,
    alternatives: Vec<String>,
    seasonal: bool,
}

impl CatalogEntryBuilder {
    pub fn new(name: &str, category: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            price,
            alternatives: Vec::new(),
            seasonal: false,
        }
    }

    pub fn alternatives(mut self, alternatives: &[&str]) -> Self {
        self.alternatives = alternatives.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn seasonal(mut self) -> Self {
        self.seasonal = true;
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "category": self.category,
            "price": self.price,
            "alternatives": self.alternatives,
            "seasonal": self.seasonal,
        })
    }
}

/// Assistant over the reference catalog with every draw pinned to `include`
pub fn assistant_with_fixed_draws(include: bool) -> Assistant {
    Assistant::new(
        Catalog::reference(),
        ListEngine::with_history(DEFAULT_HISTORY),
        SuggestionEngine::new(Box::new(FixedSource(include))),
        AdvisoryQueue::default(),
    )
}
