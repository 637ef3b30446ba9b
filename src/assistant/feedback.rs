use std::fmt;

use crate::engine::Advisory;

/// Fallback message for utterances no rule understands
pub const UNRECOGNIZED_MESSAGE: &str = "I didn't understand that. Try 'add milk' or 'remove bread'";

/// Human-readable result of the last processed command
///
/// None of these are errors: an unrecognized utterance, a missing item and an empty
/// search are all reported here and the assistant stays usable.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Added { name: String, quantity: u32 },
    QuantityUpdated { name: String, quantity: u32 },
    Removed { name: String },
    NotFound { fragment: String },
    SearchResults { query: String, count: usize },
    NoSearchMatches { query: String },
    Unrecognized,
    Advisory(Advisory),
}

impl Feedback {
    /// Whether this reports a command that could not be carried out
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Feedback::NotFound { .. } | Feedback::NoSearchMatches { .. } | Feedback::Unrecognized
        )
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Added { name, quantity } => {
                write!(f, "Added {} {} to your list", quantity, name)
            }
            Feedback::QuantityUpdated { name, quantity } => {
                write!(f, "Updated {} quantity to {}", name, quantity)
            }
            Feedback::Removed { name } => write!(f, "Removed {} from your list", name),
            Feedback::NotFound { fragment } => write!(f, "{} not found in your list", fragment),
            Feedback::SearchResults { query, count } => {
                let plural = if *count == 1 { "" } else { "s" };
                write!(f, "Found {} item{} matching \"{}\"", count, plural, query)
            }
            Feedback::NoSearchMatches { query } => write!(f, "No items found for \"{}\"", query),
            Feedback::Unrecognized => f.write_str(UNRECOGNIZED_MESSAGE),
            Feedback::Advisory(advisory) => f.write_str(&advisory.message()),
        }
    }
}
