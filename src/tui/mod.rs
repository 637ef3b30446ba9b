// Terminal UI: utterance input, list, suggestions and search results
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::{App, Focus};

use self::terminal::TerminalManager;
use crate::assistant::Assistant;

/// Run the interactive TUI until the user quits
pub fn run_interactive(assistant: Assistant) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(assistant);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
