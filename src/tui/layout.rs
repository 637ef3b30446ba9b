use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::engine::MAX_SUGGESTIONS;

/// Pane layout for the assistant screen
pub struct AppLayout {
    pub input_area: Rect,
    pub list_area: Rect,
    pub suggestions_area: Rect,
    pub results_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the layout:
    /// - Input line: top, 3 rows including border
    /// - Shopping list: left half
    /// - Suggestions: right half, sized to fit every suggestion
    /// - Search results: right half, below suggestions
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical_chunks[1]);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(MAX_SUGGESTIONS as u16 + 2), // Suggestions + borders
                Constraint::Min(3),                             // Search results
            ])
            .split(horizontal_chunks[1]);

        Self {
            input_area: vertical_chunks[0],
            list_area: horizontal_chunks[0],
            suggestions_area: right_chunks[0],
            results_area: right_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}
