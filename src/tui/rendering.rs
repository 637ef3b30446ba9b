use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::app::Focus;
use super::layout::AppLayout;
use crate::assistant::Snapshot;
use crate::models::{SearchResult, Suggestion};
use crate::utils::format_price;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ERROR: Color = Color::Rgb(239, 68, 68);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);

/// Everything one frame needs
pub struct RenderState<'a> {
    pub snapshot: &'a Snapshot,
    pub input: &'a str,
    pub focus: Focus,
    pub selected_idx: usize,
    pub feedback_is_failure: bool,
}

impl RenderState<'_> {
    /// Selection index for `pane`, if it has focus
    fn selection_in(&self, pane: Focus) -> Option<usize> {
        (self.focus == pane).then_some(self.selected_idx)
    }
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_input(frame, layout.input_area, state.input);
    render_list(frame, layout.list_area, state.snapshot, state.selection_in(Focus::List));
    render_suggestions(
        frame,
        layout.suggestions_area,
        &state.snapshot.suggestions,
        state.selection_in(Focus::Suggestions),
    );
    render_results(
        frame,
        layout.results_area,
        &state.snapshot.search_results,
        state.selection_in(Focus::Results),
    );
    render_status_bar(frame, layout.status_area, &state.snapshot.feedback, state.feedback_is_failure);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { MUTED };
    Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)).title(title)
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BRIGHT)
    }
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::raw(input.to_string()),
    ]);
    let paragraph = Paragraph::new(line).block(pane_block(" Say something ".to_string(), true));
    frame.render_widget(paragraph, area);
}

/// List grouped by category: a header row per category, then its items
fn render_list(frame: &mut Frame, area: Rect, snapshot: &Snapshot, selected: Option<usize>) {
    let mut rows: Vec<ListItem> = Vec::new();
    let mut item_idx = 0;

    for group in &snapshot.groups {
        rows.push(ListItem::new(Line::from(Span::styled(
            format!("{} ({})", group.category, format_price(group.subtotal())),
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        ))));
        for item in &group.items {
            let content = format!(
                "  {} x{}  {}",
                item.name,
                item.quantity,
                format_price(item.line_total())
            );
            rows.push(ListItem::new(content).style(row_style(selected == Some(item_idx))));
            item_idx += 1;
        }
    }

    if rows.is_empty() {
        rows.push(ListItem::new("Your list is empty").style(Style::default().fg(MUTED)));
    }

    let title = format!(" List: {} items | Total {} ", snapshot.item_count, format_price(snapshot.total));
    frame.render_widget(List::new(rows).block(pane_block(title, selected.is_some())), area);
}

fn render_suggestions(
    frame: &mut Frame,
    area: Rect,
    suggestions: &[Suggestion],
    selected: Option<usize>,
) {
    let rows: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(idx, suggestion)| {
            let content = format!("{}  ({})", suggestion.item_name, suggestion.reason.label());
            ListItem::new(content).style(row_style(selected == Some(idx)))
        })
        .collect();

    let block = pane_block(" Suggestions ".to_string(), selected.is_some());
    frame.render_widget(List::new(rows).block(block), area);
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    results: &[SearchResult],
    selected: Option<usize>,
) {
    let rows: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let mut content =
                format!("{} ({})  {}", result.name, result.category, format_price(result.unit_price));
            if result.seasonal {
                content.push_str("  *seasonal*");
            }
            ListItem::new(content).style(row_style(selected == Some(idx)))
        })
        .collect();

    let title = format!(" Search results ({}) ", results.len());
    frame.render_widget(List::new(rows).block(pane_block(title, selected.is_some())), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, feedback: &str, is_failure: bool) {
    let (status_text, fg) = if feedback.is_empty() {
        (
            " Enter: send / add selected | Tab: switch pane | Del: remove | Esc: clear | Ctrl+C: quit "
                .to_string(),
            BRIGHT,
        )
    } else if is_failure {
        (format!(" [!] {} ", feedback), ERROR)
    } else {
        (format!(" {} ", feedback), BRIGHT)
    };

    let paragraph = Paragraph::new(status_text).style(Style::default().fg(fg).bg(STATUS_BG));
    frame.render_widget(paragraph, area);
}
