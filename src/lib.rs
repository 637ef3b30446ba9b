//! Shopping Voice - a voice-driven shopping list assistant
//!
//! This library turns free-form utterances ("add 2 bottles of water", "remove bread",
//! "find apples under $3") into shopping list operations. It provides:
//!
//! - A rule-based intent parser (add / remove / search / unrecognized)
//! - A list engine with merge-on-add semantics, catalog enrichment and category grouping
//! - A probabilistic suggestion engine drawing from purchase history and seasonal items
//! - Catalog search by name or category with an optional price ceiling
//! - Deferred "you might also like" advisories
//!
//! # Example
//!
//! ```rust
//! use shopping_voice::{Intent, parse};
//!
//! let intent = parse("find apples under $3");
//! assert_eq!(
//!     intent,
//!     Intent::Search { query: "apples".to_string(), max_price: Some(3.0) }
//! );
//! ```

pub mod assistant;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod intent;
pub mod models;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use assistant::{Assistant, Feedback, Snapshot};
pub use catalog::{Catalog, load_catalog};
pub use config::Config;
pub use engine::{ListEngine, SuggestionEngine, search};
pub use intent::{Intent, parse};
pub use models::{CatalogEntry, ListItem, SearchResult, Suggestion, SuggestionReason};
