/// Configuration and catalog loading integration tests
///
/// These tests write real files to a temp directory and build assistants from them
mod common;

use common::{CatalogEntryBuilder, WorkspaceBuilder};
use shopping_voice::assistant::Assistant;
use shopping_voice::catalog::load_catalog;
use shopping_voice::config::Config;

#[test]
fn test_assistant_from_config_uses_catalog_file() {
    let workspace = WorkspaceBuilder::new().with_catalog(&[
        CatalogEntryBuilder::new("Kombucha", "Beverages", 3.5).alternatives(&["kefir"]),
        CatalogEntryBuilder::new("figs", "Produce", 4.0).seasonal(),
    ]);
    let config = Config {
        catalog_path: Some(workspace.catalog_path()),
        initial_history: vec!["kombucha".to_string()],
        seed: Some(1),
        ..Config::default()
    };

    let mut assistant = Assistant::from_config(&config).unwrap();
    assistant.on_utterance("add 2 kombucha");

    let item = assistant.list().get("kombucha").unwrap();
    assert_eq!(item.category, "Beverages");
    assert_eq!(item.unit_price, 3.5);
    assert_eq!(assistant.advisories().len(), 1);

    // Items missing from the configured catalog are unpriced
    assistant.on_utterance("add milk");
    let milk = assistant.list().get("milk").unwrap();
    assert_eq!(milk.category, "uncategorized");
    assert_eq!(milk.unit_price, 0.0);
}

#[test]
fn test_config_file_partial_fields_take_defaults() {
    let workspace = WorkspaceBuilder::new()
        .with_config_json(r#"{"seasonal_probability": 0.0, "advisory_delay_ms": 250}"#);

    let config = Config::load(Some(&workspace.config_path())).unwrap();
    assert_eq!(config.seasonal_probability, 0.0);
    assert_eq!(config.advisory_delay().as_millis(), 250);
    assert_eq!(config.history_probability, Config::default().history_probability);
    assert_eq!(config.initial_history, Config::default().initial_history);
}

#[test]
fn test_config_malformed_json_is_an_error() {
    let workspace = WorkspaceBuilder::new().with_config_json("{not json");
    let err = Config::load(Some(&workspace.config_path())).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config JSON"));
}

#[test]
fn test_catalog_duplicates_rejected_after_canonicalizing() {
    let workspace = WorkspaceBuilder::new().with_catalog(&[
        CatalogEntryBuilder::new("Milk", "Dairy", 3.99),
        CatalogEntryBuilder::new("  milk ", "Dairy", 2.99),
    ]);

    let err = load_catalog(&workspace.catalog_path()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Invalid catalog"));
    assert!(message.contains("Duplicate catalog entry: 'milk'"));
}

#[test]
fn test_catalog_missing_file() {
    let workspace = WorkspaceBuilder::new();
    let err = load_catalog(&workspace.catalog_path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read catalog file"));
}

#[test]
fn test_seeded_assistants_agree() {
    let config = Config { seed: Some(2024), ..Config::default() };
    let mut first = Assistant::from_config(&config).unwrap();
    let mut second = Assistant::from_config(&config).unwrap();

    for utterance in ["add milk", "add apples", "remove milk", "add bananas"] {
        first.on_utterance(utterance);
        second.on_utterance(utterance);
        assert_eq!(first.suggestions(), second.suggestions());
    }
}
