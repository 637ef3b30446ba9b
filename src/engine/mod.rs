//! Shopping list state and the engines that read it.
//!
//! - [`list`] - Owned list + purchase history aggregate with add/merge/remove semantics
//! - [`suggest`] - Probabilistic history/seasonal suggestions behind an injectable source
//! - [`search`] - Catalog filtering by name/category substring and price ceiling
//! - [`advisory`] - Delayed, fire-and-forget "you might also like" notices

pub mod advisory;
pub mod list;
pub mod search;
pub mod suggest;

pub use advisory::{Advisory, AdvisoryQueue};
pub use list::{AddOutcome, ListEngine, PurchaseHistory, RemoveOutcome};
pub use search::search;
pub use suggest::{
    FixedSource, MAX_SUGGESTIONS, ProbabilitySource, RandomSource, ScriptedSource,
    SuggestionEngine,
};
