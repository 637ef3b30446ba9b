use serde::{Deserialize, Serialize};

/// Structured interpretation of a single utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    /// Put `quantity` of `name` on the list (merging with an existing line)
    Add { name: String, quantity: u32 },
    /// Drop the first list item whose name contains `name_fragment`
    Remove { name_fragment: String },
    /// Filter the catalog by name/category, optionally under a price ceiling
    Search { query: String, max_price: Option<f64> },
    /// No rule matched; carries the utterance as received
    Unrecognized { original_text: String },
}

/// Rule categories, listed in the priority order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    Remove,
    Search,
    Add,
}

impl Intent {
    pub fn kind(&self) -> Option<IntentKind> {
        match self {
            Intent::Add { .. } => Some(IntentKind::Add),
            Intent::Remove { .. } => Some(IntentKind::Remove),
            Intent::Search { .. } => Some(IntentKind::Search),
            Intent::Unrecognized { .. } => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.kind().is_some()
    }
}
