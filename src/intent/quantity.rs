use std::sync::LazyLock;

use regex::Regex;

/// Unit words that may follow a number ("2 bottles of water", "3 lb. of rice")
pub const UNIT_WORDS: &str = r"bottles?|cans?|pounds?|lbs?|pieces?";

/// A standalone number, whole or decimal ("7up" and "v8" are names, not quantities)
const NUMBER: &str = r"\b(\d+(?:\.\d+)?)";

static QUANTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{NUMBER}(?:\s*(?:{UNIT_WORDS})\b|\b)"))
        .expect("quantity pattern is valid")
});

static LEADING_QUANTITY_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{NUMBER}(?:\s*(?:{UNIT_WORDS})\b\.?|\b)\s*(?:of\s+)?"))
        .expect("leading quantity pattern is valid")
});

/// Extract the quantity from an (already lowercased) utterance
///
/// Takes the first standalone `<number> <unit>?` occurrence anywhere in the text.
/// Decimal amounts round up ("2.5 pounds" buys 3). Missing, zero or overflowing
/// quantities fall back to 1 so list quantities stay positive.
pub fn extract_quantity(text: &str) -> u32 {
    QUANTITY_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_quantity(m.as_str()))
        .filter(|&quantity| quantity > 0)
        .unwrap_or(1)
}

fn parse_quantity(number: &str) -> Option<u32> {
    if !number.contains('.') {
        return number.parse::<u32>().ok();
    }
    let amount = number.parse::<f64>().ok()?.ceil();
    (amount.is_finite() && amount <= f64::from(u32::MAX)).then_some(amount as u32)
}

/// Remove a leading quantity/unit clause from an item phrase ("2 bottles of water" → "water")
///
/// Digits glued to a name ("7up") are part of the name and stay.
pub fn strip_quantity_clause(phrase: &str) -> &str {
    match LEADING_QUANTITY_CLAUSE.find(phrase) {
        Some(m) => phrase[m.end()..].trim_start(),
        None => phrase,
    }
}
