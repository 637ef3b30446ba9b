//! Command dispatch: the single owned aggregate front ends talk to.
//!
//! An [`Assistant`] owns the catalog, the list engine, the suggestion engine and the
//! advisory queue. Front ends feed it utterances via [`Assistant::on_utterance`] (or the
//! quick actions [`Assistant::add_item`] / [`Assistant::remove_item`]) and render
//! [`Assistant::snapshot`].
//!
//! # Processing cycle
//!
//! 1. Sanitize and parse the utterance into an [`Intent`]
//! 2. Add/Remove go to the list engine, Search goes to the catalog search
//! 3. A successful list mutation recomputes suggestions; an add whose catalog entry has
//!    alternatives schedules a deferred advisory
//! 4. Feedback is replaced with the outcome of this command
//!
//! Each call runs to completion. Re-entrancy is the caller's concern.
//!
//! # Example
//!
//! ```rust
//! use shopping_voice::assistant::Assistant;
//!
//! let mut assistant = Assistant::with_defaults();
//! assistant.on_utterance("add 2 bottles of water");
//! assert_eq!(assistant.feedback_text(), "Added 2 water to your list");
//! assert!((assistant.list().total() - 1.98).abs() < 1e-9);
//! ```

pub mod feedback;
pub mod snapshot;

use std::time::Instant;

use anyhow::Result;
use uuid::Uuid;

pub use feedback::{Feedback, UNRECOGNIZED_MESSAGE};
pub use snapshot::Snapshot;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::engine::{
    AddOutcome, Advisory, AdvisoryQueue, ListEngine, RandomSource, RemoveOutcome,
    SuggestionEngine, search,
};
use crate::intent::{Intent, parse};
use crate::models::{SearchResult, Suggestion};
use crate::utils::{canonical_name, strip_control_sequences};

pub struct Assistant {
    catalog: Catalog,
    list: ListEngine,
    suggester: SuggestionEngine,
    advisories: AdvisoryQueue,
    suggestions: Vec<Suggestion>,
    search_results: Vec<SearchResult>,
    feedback: Option<Feedback>,
}

impl Assistant {
    /// Assemble an assistant and compute the initial suggestions
    pub fn new(
        catalog: Catalog,
        list: ListEngine,
        suggester: SuggestionEngine,
        advisories: AdvisoryQueue,
    ) -> Self {
        let mut assistant = Self {
            catalog,
            list,
            suggester,
            advisories,
            suggestions: Vec::new(),
            search_results: Vec::new(),
            feedback: None,
        };
        assistant.refresh_suggestions();
        assistant
    }

    /// Build from configuration: catalog, seeded history, probabilities, advisory delay
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = config.catalog()?;
        let list = ListEngine::with_history(&config.initial_history);
        let suggester = SuggestionEngine::new(Box::new(RandomSource::new(config.seed)))
            .with_probabilities(config.history_probability, config.seasonal_probability);
        let advisories = AdvisoryQueue::new(config.advisory_delay());

        tracing::info!(
            catalog_entries = catalog.len(),
            history = list.history().len(),
            "assistant ready"
        );
        Ok(Self::new(catalog, list, suggester, advisories))
    }

    /// Reference catalog, default history and probabilities, unseeded randomness
    pub fn with_defaults() -> Self {
        let config = Config::default();
        let list = ListEngine::with_history(&config.initial_history);
        let suggester = SuggestionEngine::new(Box::new(RandomSource::new(None)));
        Self::new(Catalog::reference(), list, suggester, AdvisoryQueue::new(config.advisory_delay()))
    }

    /// Process one finalized utterance
    pub fn on_utterance(&mut self, text: &str) -> Intent {
        self.on_utterance_at(text, Instant::now())
    }

    /// Process one finalized utterance; `now` anchors any advisory it schedules
    pub fn on_utterance_at(&mut self, text: &str, now: Instant) -> Intent {
        let text = strip_control_sequences(text);
        let intent = parse(&text);
        tracing::debug!(utterance = %text, ?intent, "processing utterance");

        match &intent {
            Intent::Add { name, quantity } => self.add_item_at(name, *quantity, now),
            Intent::Remove { name_fragment } => self.remove_item(name_fragment),
            Intent::Search { query, max_price } => self.run_search(query, *max_price),
            Intent::Unrecognized { .. } => self.feedback = Some(Feedback::Unrecognized),
        }

        intent
    }

    /// Quick-add (suggestion or search result button)
    pub fn add_item(&mut self, name: &str, quantity: u32) {
        self.add_item_at(name, quantity, Instant::now());
    }

    pub fn add_item_at(&mut self, name: &str, quantity: u32, now: Instant) {
        if canonical_name(name).is_empty() {
            self.feedback = Some(Feedback::Unrecognized);
            return;
        }

        let outcome = self.list.add(&self.catalog, name, quantity);
        let item = outcome.item();

        if let Some(alternative) = outcome.alternative() {
            self.advisories.schedule(now, Advisory::new(&item.name, alternative));
        }

        self.feedback = Some(match &outcome {
            AddOutcome::ItemAdded { item, .. } => {
                Feedback::Added { name: item.name.clone(), quantity: item.quantity }
            }
            AddOutcome::ItemQuantityUpdated { item, .. } => {
                Feedback::QuantityUpdated { name: item.name.clone(), quantity: item.quantity }
            }
        });
        self.refresh_suggestions();
    }

    /// Remove the first list item whose name contains `fragment`
    pub fn remove_item(&mut self, fragment: &str) {
        if fragment.trim().is_empty() {
            self.feedback = Some(Feedback::Unrecognized);
            return;
        }

        match self.list.remove(fragment) {
            RemoveOutcome::ItemRemoved(item) => {
                self.feedback = Some(Feedback::Removed { name: item.name });
                self.refresh_suggestions();
            }
            RemoveOutcome::NotFound { fragment } => {
                self.feedback = Some(Feedback::NotFound { fragment });
            }
        }
    }

    /// Remove a specific list line (the list pane's remove action)
    pub fn remove_list_item(&mut self, id: Uuid) {
        if let Some(item) = self.list.remove_by_id(id) {
            self.feedback = Some(Feedback::Removed { name: item.name });
            self.refresh_suggestions();
        }
    }

    /// Replace the search results with catalog matches
    pub fn run_search(&mut self, query: &str, max_price: Option<f64>) {
        self.search_results = search(&self.catalog, query, max_price);
        let query = query.trim().to_string();
        self.feedback = Some(if self.search_results.is_empty() {
            Feedback::NoSearchMatches { query }
        } else {
            Feedback::SearchResults { query, count: self.search_results.len() }
        });
    }

    /// Fire advisories due at `now`; the latest one becomes the feedback
    pub fn poll_advisories(&mut self, now: Instant) -> Vec<Advisory> {
        let due = self.advisories.drain_due(now);
        if let Some(last) = due.last() {
            self.feedback = Some(Feedback::Advisory(last.clone()));
        }
        due
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions =
            self.suggester.suggest(self.list.items(), self.list.history(), &self.catalog);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            groups: self.list.grouped_by_category(),
            total: self.list.total(),
            item_count: self.list.len(),
            suggestions: self.suggestions.clone(),
            search_results: self.search_results.clone(),
            feedback: self.feedback_text(),
            pending_advisories: self.advisories.len(),
        }
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Current feedback line, empty before the first command
    pub fn feedback_text(&self) -> String {
        self.feedback.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    pub fn list(&self) -> &ListEngine {
        &self.list
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn search_results(&self) -> &[SearchResult] {
        &self.search_results
    }

    pub fn advisories(&self) -> &AdvisoryQueue {
        &self.advisories
    }
}
