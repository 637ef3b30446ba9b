//! Ordered rule table for intent classification.
//!
//! Each [`Rule`] pairs a pattern with a constructor that builds an [`Intent`] from the
//! captures. Rules are tried in table order and the table is sorted by category:
//! every Remove rule, then every Search rule, then every Add rule. Removal and search
//! phrasing is more specific than the add vocabulary ("remove 2 apples" must never add).

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::ast::{Intent, IntentKind};
use super::quantity::strip_quantity_clause;

/// Leading article in an item phrase ("the cheese", "some apples")
static LEADING_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:the|a|an|some)\s+").expect("article pattern is valid"));

/// Stray connective words left in front of a trailing "list" ("milk to the list")
static TRAILING_LIST_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s+)(?:to|from|my|the|a|an)(?:\s+(?:to|from|my|the|a|an))*\s+list$")
        .expect("trailing list pattern is valid")
});

type Build = fn(&Captures, u32) -> Option<Intent>;

pub struct Rule {
    pub kind: IntentKind,
    /// Short identifier, for logging and tests
    pub name: &'static str,
    pattern: Regex,
    build: Build,
}

impl Rule {
    fn new(kind: IntentKind, name: &'static str, pattern: &str, build: Build) -> Self {
        let pattern = Regex::new(pattern).expect("rule pattern is valid");
        Self { kind, name, pattern, build }
    }

    /// Whether the pattern matches the normalized utterance
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Build an intent from the normalized utterance
    ///
    /// Returns `None` when the pattern does not match or the captured phrase is empty
    /// once quantity clauses and connective words are stripped.
    pub fn apply(&self, text: &str, quantity: u32) -> Option<Intent> {
        let caps = self.pattern.captures(text)?;
        (self.build)(&caps, quantity)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            IntentKind::Remove,
            "remove-verb",
            r"\b(?:remove|delete|take\s+off|cancel)\s+(.+?)(?:\s+from\s+(?:my\s+)?list)?$",
            build_remove,
        ),
        Rule::new(
            IntentKind::Remove,
            "take-off-list",
            r"\btake\s+(.+?)\s+off\s+(?:of\s+)?(?:my\s+|the\s+)?list$",
            build_remove,
        ),
        Rule::new(
            IntentKind::Search,
            "search-verb",
            r"\b(?:find|search(?:\s+for)?|look\s+for|show\s+me)\s+(.+?)(?:\s+under\s+\$?(\d+(?:\.\d+)?)(?:\s*dollars?)?)?$",
            build_search,
        ),
        Rule::new(
            IntentKind::Add,
            "add-verb",
            r"\b(?:add|get|buy|i\s+need|i\s+want|purchase|grab)\s+(.+?)(?:\s+to\s+(?:my\s+)?list)?$",
            build_add,
        ),
    ]
});

/// The rule table in priority order
pub fn rules() -> &'static [Rule] {
    &RULES
}

fn strip_leading_article(phrase: &str) -> &str {
    match LEADING_ARTICLE.find(phrase) {
        Some(m) => &phrase[m.end()..],
        None => phrase,
    }
}

/// Clean a captured item phrase: drop articles, the quantity clause and trailing list connectives
fn clean_item_phrase(phrase: &str) -> Option<String> {
    let phrase = strip_leading_article(phrase.trim());
    let phrase = strip_leading_article(strip_quantity_clause(phrase));
    let phrase = TRAILING_LIST_WORDS.replace(phrase, "");
    let phrase = phrase.trim();
    if phrase.is_empty() { None } else { Some(phrase.to_string()) }
}

fn build_remove(caps: &Captures, _quantity: u32) -> Option<Intent> {
    let name_fragment = clean_item_phrase(caps.get(1)?.as_str())?;
    Some(Intent::Remove { name_fragment })
}

fn build_search(caps: &Captures, _quantity: u32) -> Option<Intent> {
    let query = strip_leading_article(caps.get(1)?.as_str().trim()).trim();
    if query.is_empty() {
        return None;
    }
    let max_price = caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok());
    Some(Intent::Search { query: query.to_string(), max_price })
}

fn build_add(caps: &Captures, quantity: u32) -> Option<Intent> {
    let name = clean_item_phrase(caps.get(1)?.as_str())?;
    Some(Intent::Add { name, quantity })
}
