use std::io::{self, BufRead};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::assistant::{Assistant, Feedback, Snapshot};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::intent::parse;
use crate::models::SearchResult;
use crate::tui::run_interactive;
use crate::utils::format_price;

#[derive(Parser)]
#[command(name = "shopping-voice")]
#[command(version = "0.1.0")]
#[command(about = "Voice-driven shopping list assistant", long_about = None)]
pub struct Cli {
    /// Config file (defaults to $SHOPPING_VOICE_CONFIG, then the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog JSON file, overriding the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Seed for reproducible suggestions
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process utterances in order and print the resulting list
    Say {
        /// One utterance per argument, e.g. "add 2 milk" "remove bread"
        #[arg(required = true)]
        utterances: Vec<String>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the intent an utterance parses to, as JSON
    Parse {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Search the catalog by name or category
    Search {
        /// Substring to match; empty lists everything
        #[arg(default_value = "")]
        query: String,

        /// Only show items at or under this price
        #[arg(long)]
        max_price: Option<f64>,
    },
    /// Print the catalog grouped by category
    Catalog,
    /// Read utterances line by line from stdin
    Repl,
    /// Launch the terminal UI
    Interactive,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Say { utterances, json }) => {
            let mut assistant = build_assistant(&cli)?;
            say(&mut assistant, utterances, *json);
        }
        Some(Commands::Parse { words }) => {
            let intent = parse(&words.join(" "));
            println!("{}", serde_json::to_string(&intent)?);
        }
        Some(Commands::Search { query, max_price }) => {
            let mut assistant = build_assistant(&cli)?;
            assistant.run_search(query, *max_price);
            println!("{}", assistant.feedback_text());
            print_search_results(assistant.search_results());
        }
        Some(Commands::Catalog) => {
            let config = load_config(&cli)?;
            show_catalog(&config.catalog()?);
        }
        Some(Commands::Repl) => {
            let mut assistant = build_assistant(&cli)?;
            repl(&mut assistant)?;
        }
        Some(Commands::Interactive) => {
            let assistant = build_assistant(&cli)?;
            run_interactive(assistant)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Load config and apply command-line overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(catalog) = &cli.catalog {
        config.catalog_path = Some(catalog.clone());
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

fn build_assistant(cli: &Cli) -> Result<Assistant> {
    let config = load_config(cli)?;
    Assistant::from_config(&config)
}

fn say(assistant: &mut Assistant, utterances: &[String], json: bool) {
    for utterance in utterances {
        assistant.on_utterance(utterance);
        if !json {
            println!("{}", assistant.feedback_text());
        }
    }

    if json {
        match serde_json::to_string_pretty(&assistant.snapshot()) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("Failed to serialize snapshot: {}", e),
        }
        return;
    }

    settle_advisories(assistant);
    println!();
    print_snapshot(&assistant.snapshot());
}

/// The collaborator loop: one utterance per line, advisories fired between lines
fn repl(assistant: &mut Assistant) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;

        for advisory in assistant.poll_advisories(Instant::now()) {
            println!("{}", advisory.message());
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }
        if line == "list" {
            print_snapshot(&assistant.snapshot());
            continue;
        }

        assistant.on_utterance(line);
        println!("{}", assistant.feedback_text());
        if let Some(Feedback::SearchResults { .. }) = assistant.feedback() {
            print_search_results(assistant.search_results());
        }
    }

    settle_advisories(assistant);
    println!();
    print_snapshot(&assistant.snapshot());
    Ok(())
}

/// Wait out any pending advisories and print them as they fire
fn settle_advisories(assistant: &mut Assistant) {
    while let Some(due) = assistant.advisories().next_due() {
        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }
        for advisory in assistant.poll_advisories(Instant::now()) {
            println!("{}", advisory.message());
        }
    }
}

fn print_snapshot(snapshot: &Snapshot) {
    if snapshot.groups.is_empty() {
        println!("Your list is empty");
    }
    for group in &snapshot.groups {
        println!("{}", group.category);
        for item in &group.items {
            println!("  {} x{}  {}", item.name, item.quantity, format_price(item.line_total()));
        }
    }
    println!("Total: {}", format_price(snapshot.total));

    if !snapshot.suggestions.is_empty() {
        println!();
        println!("Suggestions:");
        for suggestion in &snapshot.suggestions {
            println!("  {} ({})", suggestion.item_name, suggestion.reason.label());
        }
    }
}

fn print_search_results(results: &[SearchResult]) {
    for result in results {
        println!("  {} ({})  {}", result.name, result.category, format_price(result.unit_price));
    }
}

fn show_catalog(catalog: &Catalog) {
    println!("Catalog: {} items", catalog.len());
    println!("================================");

    let mut categories: Vec<&str> = Vec::new();
    for entry in catalog.entries() {
        if !categories.contains(&entry.category.as_str()) {
            categories.push(&entry.category);
        }
    }

    for category in categories {
        println!("{}", category);
        for entry in catalog.entries().iter().filter(|e| e.category == category) {
            let mut line = format!("  {}  {}", entry.name, format_price(entry.unit_price));
            if entry.seasonal {
                line.push_str("  [seasonal]");
            }
            if !entry.alternatives.is_empty() {
                line.push_str(&format!("  (alternatives: {})", entry.alternatives.join(", ")));
            }
            println!("{}", line);
        }
    }
}
