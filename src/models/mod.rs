//! Data models for the shopping assistant.
//!
//! - [`CatalogEntry`] - Static product reference data (category, price, alternatives)
//! - [`ListItem`] / [`CategoryGroup`] - Shopping list contents and their grouped projection
//! - [`Suggestion`] / [`SearchResult`] - Transient, recomputed views handed to front ends
//!
//! All models derive serde traits so snapshots can be printed as JSON by the CLI.

pub mod catalog;
pub mod list;
pub mod suggestion;

pub use catalog::CatalogEntry;
pub use list::{CategoryGroup, ListItem};
pub use suggestion::{SearchResult, Suggestion, SuggestionReason};
