/// Canonical form of an item name: lowercase, trimmed, internal whitespace collapsed
pub fn canonical_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Case-insensitive substring test used by list removal and catalog search
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Render a price the way feedback and list views show it
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
