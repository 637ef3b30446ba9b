//! Suggestion engine.
//!
//! Every recomputation re-rolls from scratch:
//!
//! 1. Each purchase-history name not on the list is drawn with `history_probability`
//!    and becomes a [`SuggestionReason::HistoryRepeat`] candidate
//! 2. Each seasonal catalog entry not on the list is drawn with `seasonal_probability`
//!    and becomes a [`SuggestionReason::Seasonal`] candidate
//! 3. History candidates come first, then seasonal ones, truncated to [`MAX_SUGGESTIONS`]
//!
//! Draws come from a [`ProbabilitySource`] so tests can pin outcomes.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::list::PurchaseHistory;
use crate::catalog::Catalog;
use crate::models::{ListItem, Suggestion, SuggestionReason};
use crate::utils::canonical_name;

/// Upper bound on suggestions per recomputation
pub const MAX_SUGGESTIONS: usize = 4;
/// Inclusion chance for a history item not on the list
pub const DEFAULT_HISTORY_PROBABILITY: f64 = 0.5;
/// Inclusion chance for a seasonal item not on the list
pub const DEFAULT_SEASONAL_PROBABILITY: f64 = 0.4;

/// Source of independent inclusion decisions
pub trait ProbabilitySource {
    /// Return true with the given probability (0.0..=1.0)
    fn include(&mut self, probability: f64) -> bool;
}

/// Seedable pseudo-random source used in production
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seeded for reproducible runs, or from OS entropy when `seed` is `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl ProbabilitySource for RandomSource {
    fn include(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Always gives the same answer
pub struct FixedSource(pub bool);

impl ProbabilitySource for FixedSource {
    fn include(&mut self, _probability: f64) -> bool {
        self.0
    }
}

/// Replays a fixed sequence of draws, answering false once exhausted
#[derive(Debug, Default)]
pub struct ScriptedSource {
    draws: VecDeque<bool>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = bool>) -> Self {
        Self { draws: draws.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl ProbabilitySource for ScriptedSource {
    fn include(&mut self, _probability: f64) -> bool {
        self.draws.pop_front().unwrap_or(false)
    }
}

pub struct SuggestionEngine {
    source: Box<dyn ProbabilitySource>,
    history_probability: f64,
    seasonal_probability: f64,
}

impl SuggestionEngine {
    pub fn new(source: Box<dyn ProbabilitySource>) -> Self {
        Self {
            source,
            history_probability: DEFAULT_HISTORY_PROBABILITY,
            seasonal_probability: DEFAULT_SEASONAL_PROBABILITY,
        }
    }

    pub fn with_probabilities(mut self, history: f64, seasonal: f64) -> Self {
        self.history_probability = history;
        self.seasonal_probability = seasonal;
        self
    }

    /// Recompute suggestions for the current list
    ///
    /// Never suggests anything already on the list. A name drawn as a history repeat is
    /// not listed again as seasonal, though its seasonal draw is still taken.
    pub fn suggest(
        &mut self,
        items: &[ListItem],
        history: &PurchaseHistory,
        catalog: &Catalog,
    ) -> Vec<Suggestion> {
        let on_list = |name: &str| {
            let name = canonical_name(name);
            items.iter().any(|item| item.name == name)
        };

        let mut suggestions: Vec<Suggestion> = Vec::new();

        for name in history.iter() {
            if !on_list(name) && self.source.include(self.history_probability) {
                suggestions.push(Suggestion::new(name, SuggestionReason::HistoryRepeat));
            }
        }

        for entry in catalog.seasonal() {
            if on_list(&entry.name) {
                continue;
            }
            let drawn = self.source.include(self.seasonal_probability);
            if drawn && !suggestions.iter().any(|s| s.item_name == entry.name) {
                suggestions.push(Suggestion::new(&entry.name, SuggestionReason::Seasonal));
            }
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        tracing::debug!(count = suggestions.len(), "recomputed suggestions");
        suggestions
    }
}
