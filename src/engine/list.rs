//! List engine: exclusive owner of the shopping list and purchase history.
//!
//! # Invariants
//!
//! - At most one [`ListItem`] per canonical (case-insensitive) name; repeat adds merge
//! - Every quantity is at least 1
//! - [`ListEngine::total`] is always the sum of `unit_price * quantity` over current items
//!
//! All mutation goes through [`ListEngine::add`] and [`ListEngine::remove`].

use uuid::Uuid;

use crate::catalog::Catalog;
use crate::models::list::DEFAULT_CATEGORY;
use crate::models::{CategoryGroup, ListItem};
use crate::utils::{canonical_name, contains_ignore_case};

/// Append-only, insertion-ordered set of item names ever added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseHistory {
    names: Vec<String>,
}

impl PurchaseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a name, returning false if it was already present
    pub fn record(&mut self, name: &str) -> bool {
        let name = canonical_name(name);
        if name.is_empty() || self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = canonical_name(name);
        self.names.iter().any(|n| *n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PurchaseHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = Self::new();
        for name in iter {
            history.record(name.as_ref());
        }
        history
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// A new line was created
    ItemAdded { item: ListItem, alternative: Option<String> },
    /// An existing line's quantity grew by `added`
    ItemQuantityUpdated { item: ListItem, added: u32, alternative: Option<String> },
}

impl AddOutcome {
    /// The list line after the add
    pub fn item(&self) -> &ListItem {
        match self {
            AddOutcome::ItemAdded { item, .. } | AddOutcome::ItemQuantityUpdated { item, .. } => {
                item
            }
        }
    }

    /// First catalog alternative of the added item, if it has any
    pub fn alternative(&self) -> Option<&str> {
        match self {
            AddOutcome::ItemAdded { alternative, .. }
            | AddOutcome::ItemQuantityUpdated { alternative, .. } => alternative.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    ItemRemoved(ListItem),
    NotFound { fragment: String },
}

#[derive(Debug, Clone, Default)]
pub struct ListEngine {
    items: Vec<ListItem>,
    history: PurchaseHistory,
}

impl ListEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an empty list and a pre-seeded purchase history
    pub fn with_history<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { items: Vec::new(), history: names.into_iter().collect() }
    }

    /// Add `quantity` of `name`, merging with an existing line of the same name
    ///
    /// New lines are enriched from the catalog (category and unit price), falling back to
    /// the `uncategorized` category at price 0 for unknown items, and the name is recorded
    /// in the purchase history. A quantity of 0 is treated as 1.
    pub fn add(&mut self, catalog: &Catalog, name: &str, quantity: u32) -> AddOutcome {
        let name = canonical_name(name);
        let quantity = quantity.max(1);
        let entry = catalog.get(&name);
        let alternative = entry.and_then(|e| e.first_alternative()).map(str::to_string);

        if let Some(existing) = self.items.iter_mut().find(|item| item.name == name) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            tracing::debug!(item = %existing.name, quantity = existing.quantity, "merged list item");
            return AddOutcome::ItemQuantityUpdated {
                item: existing.clone(),
                added: quantity,
                alternative,
            };
        }

        let (category, unit_price) = match entry {
            Some(entry) => (entry.category.clone(), entry.unit_price),
            None => (DEFAULT_CATEGORY.to_string(), 0.0),
        };
        let item = ListItem { id: Uuid::new_v4(), name: name.clone(), quantity, category, unit_price };
        self.items.push(item.clone());
        self.history.record(&name);
        tracing::debug!(item = %item.name, quantity, category = %item.category, "added list item");

        AddOutcome::ItemAdded { item, alternative }
    }

    /// Remove the first item whose name contains `fragment` (case-insensitive)
    ///
    /// Substring matching: "bread" removes "whole wheat bread".
    /// It also means a short fragment can hit an unintended earlier item.
    /// A blank fragment matches nothing.
    pub fn remove(&mut self, fragment: &str) -> RemoveOutcome {
        let fragment = fragment.trim();
        let Some(id) = self
            .items
            .iter()
            .find(|item| !fragment.is_empty() && contains_ignore_case(&item.name, fragment))
            .map(|i| i.id)
        else {
            return RemoveOutcome::NotFound { fragment: fragment.to_string() };
        };

        self.remove_by_id(id)
            .map(RemoveOutcome::ItemRemoved)
            .unwrap_or_else(|| RemoveOutcome::NotFound { fragment: fragment.to_string() })
    }

    /// Remove an item by identity
    pub fn remove_by_id(&mut self, id: Uuid) -> Option<ListItem> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        let item = self.items.remove(idx);
        tracing::debug!(item = %item.name, "removed list item");
        Some(item)
    }

    /// Items grouped by category, categories in order of first appearance
    pub fn grouped_by_category(&self) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|g| g.category == item.category) {
                Some(group) => group.items.push(item.clone()),
                None => groups.push(CategoryGroup {
                    category: item.category.clone(),
                    items: vec![item.clone()],
                }),
            }
        }
        groups
    }

    /// Sum of unit price times quantity over all items
    pub fn total(&self) -> f64 {
        self.items.iter().map(ListItem::line_total).sum()
    }

    /// Look up an item by name (case-insensitive, exact)
    pub fn get(&self, name: &str) -> Option<&ListItem> {
        let name = canonical_name(name);
        self.items.iter().find(|item| item.name == name)
    }

    /// Whether an item with this name is on the list (case-insensitive, exact)
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Items in insertion order
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn history(&self) -> &PurchaseHistory {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
