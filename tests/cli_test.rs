/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use assert_cmd::Command;
use common::{CatalogEntryBuilder, WorkspaceBuilder};
use predicates::prelude::*;

/// Binary isolated from any user config on the machine
fn shopping_voice(workspace: &WorkspaceBuilder) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shopping-voice"));
    cmd.env("SHOPPING_VOICE_CONFIG", workspace.missing_config_path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_no_command_shows_help_message() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace)
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Voice-driven shopping list assistant"))
        .stdout(predicate::str::contains("say"))
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn test_cli_version_flag() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace).arg("checkout").assert().failure();
}

#[test]
fn test_cli_parse_add() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace)
        .args(["parse", "add", "2", "bottles", "of", "water"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"intent":"add","name":"water","quantity":2}"#));
}

#[test]
fn test_cli_parse_search_with_ceiling() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace)
        .args(["parse", "find apples under $3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""intent":"search""#))
        .stdout(predicate::str::contains(r#""max_price":3.0"#));
}

#[test]
fn test_cli_parse_unrecognized_keeps_original_text() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace)
        .args(["parse", "Xyzzy Quux"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""original_text":"Xyzzy Quux""#));
}

#[test]
fn test_cli_say_reports_feedback_and_list() {
    let workspace = WorkspaceBuilder::new().with_config_json(r#"{"advisory_delay_ms": 0}"#);
    shopping_voice(&workspace)
        .arg("--config")
        .arg(workspace.config_path())
        .args(["say", "add 2 bottles of water", "add eggs", "xyzzy quux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 2 water to your list"))
        .stdout(predicate::str::contains("Added 1 eggs to your list"))
        .stdout(predicate::str::contains("I didn't understand that"))
        .stdout(predicate::str::contains("Added water. You might also like sparkling water!"))
        .stdout(predicate::str::contains("Beverages"))
        .stdout(predicate::str::contains("water x2  $1.98"))
        .stdout(predicate::str::contains("Total: $6.97"));
}

#[test]
fn test_cli_say_json_snapshot() {
    let workspace = WorkspaceBuilder::new();
    let output = shopping_voice(&workspace)
        .args(["--seed", "7", "say", "--json", "add milk", "add 2 milk", "find apples"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["item_count"], 1);
    assert_eq!(snapshot["groups"][0]["category"], "Dairy");
    assert_eq!(snapshot["groups"][0]["items"][0]["quantity"], 3);
    assert_eq!(snapshot["search_results"][0]["name"], "apples");
    assert_eq!(snapshot["feedback"], "Found 1 item matching \"apples\"");
    assert_eq!(snapshot["pending_advisories"], 2);
}

#[test]
fn test_cli_say_requires_utterance() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace).arg("say").assert().failure();
}

#[test]
fn test_cli_search_with_max_price() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace)
        .args(["search", "milk", "--max-price", "4.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 items matching \"milk\""))
        .stdout(predicate::str::contains("almond milk (Dairy)  $4.49"))
        .stdout(predicate::str::contains("oat milk").not());
}

#[test]
fn test_cli_search_no_matches() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace)
        .args(["search", "caviar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found for \"caviar\""));
}

#[test]
fn test_cli_catalog_reference() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog: 21 items"))
        .stdout(predicate::str::contains("apples  $1.99  [seasonal]"))
        .stdout(predicate::str::contains("(alternatives: almond milk, oat milk, soy milk)"));
}

#[test]
fn test_cli_catalog_from_file() {
    let workspace = WorkspaceBuilder::new().with_catalog(&[
        CatalogEntryBuilder::new("Kombucha", "Beverages", 3.5).alternatives(&["Kefir"]),
        CatalogEntryBuilder::new("figs", "Produce", 4.0).seasonal(),
    ]);
    shopping_voice(&workspace)
        .arg("--catalog")
        .arg(workspace.catalog_path())
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog: 2 items"))
        .stdout(predicate::str::contains("kombucha  $3.50  (alternatives: kefir)"))
        .stdout(predicate::str::contains("figs  $4.00  [seasonal]"));
}

#[test]
fn test_cli_catalog_path_from_config() {
    let workspace = WorkspaceBuilder::new()
        .with_catalog(&[CatalogEntryBuilder::new("figs", "Produce", 4.0)]);
    let config = format!(
        r#"{{"catalog_path": {}}}"#,
        serde_json::to_string(&workspace.catalog_path()).unwrap()
    );
    let workspace = workspace.with_config_json(&config);

    shopping_voice(&workspace)
        .env("SHOPPING_VOICE_CONFIG", workspace.config_path())
        .args(["search", "figs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("figs (Produce)  $4.00"));
}

#[test]
fn test_cli_invalid_catalog_fails_with_context() {
    let workspace = WorkspaceBuilder::new().with_catalog_json(r#"[{"name": "milk"}]"#);
    shopping_voice(&workspace)
        .arg("--catalog")
        .arg(workspace.catalog_path())
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse catalog JSON"));
}

#[test]
fn test_cli_missing_explicit_config_fails() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace)
        .arg("--config")
        .arg(workspace.missing_config_path())
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_cli_invalid_probability_rejected() {
    let workspace = WorkspaceBuilder::new().with_config_json(r#"{"history_probability": 1.5}"#);
    shopping_voice(&workspace)
        .arg("--config")
        .arg(workspace.config_path())
        .args(["say", "add milk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("history_probability must be between 0 and 1"));
}

#[test]
fn test_cli_repl_processes_lines() {
    let workspace = WorkspaceBuilder::new().with_config_json(r#"{"advisory_delay_ms": 0}"#);
    shopping_voice(&workspace)
        .arg("--config")
        .arg(workspace.config_path())
        .arg("repl")
        .write_stdin("add whole wheat bread\n\nfind dairy under $4\nremove bread\nremove bread\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 1 whole wheat bread to your list"))
        .stdout(predicate::str::contains("Found 1 item matching \"dairy\""))
        .stdout(predicate::str::contains("milk (Dairy)  $3.99"))
        .stdout(predicate::str::contains("Removed whole wheat bread from your list"))
        .stdout(predicate::str::contains("bread not found in your list"))
        .stdout(predicate::str::contains("Your list is empty"));
}

#[test]
fn test_cli_repl_quit_stops_reading() {
    let workspace = WorkspaceBuilder::new();
    shopping_voice(&workspace)
        .arg("repl")
        .write_stdin("add eggs\nquit\nadd cheese\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 1 eggs to your list"))
        .stdout(predicate::str::contains("cheese").not());
}
