use serde::Serialize;

use crate::models::{CategoryGroup, SearchResult, Suggestion};

/// Read-only view of assistant state handed to front ends
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub groups: Vec<CategoryGroup>,
    pub total: f64,
    pub item_count: usize,
    pub suggestions: Vec<Suggestion>,
    pub search_results: Vec<SearchResult>,
    pub feedback: String,
    pub pending_advisories: usize,
}
