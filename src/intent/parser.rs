//! Utterance parser.
//!
//! # Pipeline
//!
//! 1. Normalize: lowercase, collapse whitespace, drop trailing sentence punctuation
//! 2. Extract the quantity (`<number> <unit>? (of)?`, default 1) from the whole utterance
//! 3. Try the [rule table](super::rules::rules) in order: Remove, then Search, then Add
//! 4. Fall back to [`Intent::Unrecognized`] with the original text
//!
//! # Examples
//!
//! ```rust
//! # use shopping_voice::intent::{parse, Intent};
//! assert_eq!(
//!     parse("Add 2 bottles of water"),
//!     Intent::Add { name: "water".to_string(), quantity: 2 }
//! );
//! assert_eq!(
//!     parse("find apples under $3"),
//!     Intent::Search { query: "apples".to_string(), max_price: Some(3.0) }
//! );
//! assert!(matches!(parse("xyzzy quux"), Intent::Unrecognized { .. }));
//! ```

use super::ast::Intent;
use super::quantity::extract_quantity;
use super::rules::rules;

/// Parse an utterance into an intent. Pure and deterministic; never fails.
pub fn parse(utterance: &str) -> Intent {
    let text = normalize_utterance(utterance);
    let quantity = extract_quantity(&text);

    for rule in rules() {
        if let Some(intent) = rule.apply(&text, quantity) {
            tracing::trace!(rule = rule.name, ?intent, "utterance matched");
            return intent;
        }
    }

    Intent::Unrecognized { original_text: utterance.to_string() }
}

/// Lowercase, collapse whitespace and strip trailing `.`, `!`, `?` and `,`
fn normalize_utterance(utterance: &str) -> String {
    let collapsed = utterance.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    collapsed.trim_end_matches(['.', '!', '?', ',']).trim_end().to_string()
}
