use serde::{Deserialize, Serialize};

use super::catalog::CatalogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionReason {
    /// Bought before but not on the current list
    HistoryRepeat,
    /// In-season catalog item
    Seasonal,
}

impl SuggestionReason {
    /// Short label shown next to a suggestion
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionReason::HistoryRepeat => "frequently purchased",
            SuggestionReason::Seasonal => "seasonal & fresh",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub item_name: String,
    pub reason: SuggestionReason,
}

impl Suggestion {
    pub fn new(item_name: impl Into<String>, reason: SuggestionReason) -> Self {
        Self { item_name: item_name.into(), reason }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub alternatives: Vec<String>,
    pub seasonal: bool,
}

impl From<&CatalogEntry> for SearchResult {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.clone(),
            category: entry.category.clone(),
            unit_price: entry.unit_price,
            alternatives: entry.alternatives.clone(),
            seasonal: entry.seasonal,
        }
    }
}
