//! Utterance-to-intent parsing.
//!
//! Turns free-form shopping utterances ("add 2 bottles of water", "remove bread",
//! "find apples under $3") into a typed [`Intent`]. Parsing never fails: anything that
//! matches no rule becomes [`Intent::Unrecognized`].

pub mod ast;
pub mod parser;
pub mod quantity;
pub mod rules;

pub use ast::{Intent, IntentKind};
pub use parser::parse;
pub use quantity::extract_quantity;
pub use rules::{Rule, rules};
