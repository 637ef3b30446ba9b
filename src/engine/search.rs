use crate::catalog::Catalog;
use crate::models::{CatalogEntry, SearchResult};

/// Search the catalog, preserving catalog order
///
/// Match logic:
/// - Name OR category contains the query (case-insensitive substring)
/// - AND unit price <= `max_price` when a ceiling is given
///
/// An empty query matches every entry, so `search(catalog, "", Some(2.0))` lists
/// everything at or under $2.
pub fn search(catalog: &Catalog, query: &str, max_price: Option<f64>) -> Vec<SearchResult> {
    let query = query.trim().to_lowercase();

    let results: Vec<SearchResult> = catalog
        .entries()
        .iter()
        .filter(|entry| match_query(entry, &query) && match_price(entry, max_price))
        .map(SearchResult::from)
        .collect();

    tracing::debug!(query = %query, ?max_price, matches = results.len(), "catalog search");
    results
}

/// Name or category contains the (already lowercased) query
fn match_query(entry: &CatalogEntry, query: &str) -> bool {
    entry.name.contains(query) || entry.category.to_lowercase().contains(query)
}

/// Price at or under the ceiling, if any
fn match_price(entry: &CatalogEntry, max_price: Option<f64>) -> bool {
    max_price.is_none_or(|ceiling| entry.unit_price <= ceiling)
}
