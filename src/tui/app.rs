//! TUI application state and event handling.
//!
//! The `App` owns the [`Assistant`] and runs the event loop via `run()`:
//!
//! - **Input line**: typed utterances go to the assistant on Enter
//! - **Focus**: Tab cycles between the list, suggestions and search results panes
//! - **Quick actions**: Enter on an empty input adds the selected suggestion or search
//!   result; Delete removes the selected list item
//! - **Advisories**: polled every tick so deferred notices reach the status bar
//! - **Dirty state tracking**: redraws only when state changes (or every 100ms for resizes)

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use uuid::Uuid;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::assistant::Assistant;

/// Longest utterance accepted from the input line
const MAX_INPUT_LEN: usize = 256;

/// Which pane the selection cursor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Suggestions,
    Results,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::List => Focus::Suggestions,
            Focus::Suggestions => Focus::Results,
            Focus::Results => Focus::List,
        }
    }
}

pub struct App {
    assistant: Assistant,
    input: String,
    focus: Focus,
    selected_idx: usize,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(assistant: Assistant) -> Self {
        Self {
            assistant,
            input: String::new(),
            focus: Focus::List,
            selected_idx: 0,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.tick(Instant::now());

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let snapshot = self.assistant.snapshot();
                let state = RenderState {
                    snapshot: &snapshot,
                    input: &self.input,
                    focus: self.focus,
                    selected_idx: self.selected_idx,
                    feedback_is_failure: self.assistant.feedback().is_some_and(|f| f.is_failure()),
                };
                terminal.draw(|f| render_ui(f, &state))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Fire due advisories (marks dirty if any fired)
    fn tick(&mut self, now: Instant) {
        if !self.assistant.poll_advisories(now).is_empty() {
            self.needs_redraw = true;
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearInput => {
                if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::Submit => self.submit(),
            Action::ToggleFocus => {
                self.focus = self.focus.next();
                self.selected_idx = 0;
                self.needs_redraw = true;
            }
            Action::RemoveSelected => self.remove_selected(),
            Action::Input(c) => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                    self.needs_redraw = true;
                }
            }
            Action::DeleteChar => {
                if self.input.pop().is_some() {
                    self.needs_redraw = true;
                }
            }
            Action::None => {}
        }
    }

    /// Send the typed utterance, or quick-add the selection when the input is empty
    fn submit(&mut self) {
        let utterance = std::mem::take(&mut self.input);
        if utterance.trim().is_empty() {
            self.quick_add_selected();
        } else {
            self.assistant.on_utterance(&utterance);
        }
        self.clamp_selection();
        self.needs_redraw = true;
    }

    fn quick_add_selected(&mut self) {
        let name = match self.focus {
            Focus::Suggestions => self
                .assistant
                .suggestions()
                .get(self.selected_idx)
                .map(|s| s.item_name.clone()),
            Focus::Results => {
                self.assistant.search_results().get(self.selected_idx).map(|r| r.name.clone())
            }
            Focus::List => None,
        };
        if let Some(name) = name {
            self.assistant.add_item(&name, 1);
        }
    }

    fn remove_selected(&mut self) {
        if self.focus != Focus::List {
            return;
        }
        if let Some(id) = self.selected_list_item() {
            self.assistant.remove_list_item(id);
            self.clamp_selection();
            self.needs_redraw = true;
        }
    }

    /// The selected list line, counted in the grouped display order
    fn selected_list_item(&self) -> Option<Uuid> {
        self.assistant
            .list()
            .grouped_by_category()
            .into_iter()
            .flat_map(|group| group.items)
            .nth(self.selected_idx)
            .map(|item| item.id)
    }

    /// Number of selectable rows in the focused pane
    fn focused_len(&self) -> usize {
        match self.focus {
            Focus::List => self.assistant.list().len(),
            Focus::Suggestions => self.assistant.suggestions().len(),
            Focus::Results => self.assistant.search_results().len(),
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.focused_len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    /// Keep the selection in range after the focused pane shrinks
    fn clamp_selection(&mut self) {
        self.selected_idx = self.selected_idx.min(self.focused_len().saturating_sub(1));
    }
}
