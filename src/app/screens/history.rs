//! History screen implementation
//!
//! Displays past lesson and quiz sessions loaded from persistence and
//! allows scrolling through them.

use crate::models::record::SessionRecord;
use crate::util::layout::screen_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// History list component
#[derive(Debug)]
pub struct HistoryScreen {
    records: Vec<SessionRecord>,
    selected_index: usize,
    list_state: ListState,
}

impl HistoryScreen {
    /// Create a new history screen from a list of records
    pub fn new(records: Vec<SessionRecord>) -> Self {
        let mut list_state = ListState::default();
        if !records.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            records,
            selected_index: 0,
            list_state,
        }
    }

    /// Update the record list, newest first
    pub fn set_records(&mut self, records: Vec<SessionRecord>) {
        self.records = records;
        self.selected_index = 0;
        self.list_state
            .select(if self.records.is_empty() { None } else { Some(0) });
    }

    /// The currently selected record
    pub fn selected_record(&self) -> Option<&SessionRecord> {
        self.records.get(self.selected_index)
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.records.is_empty() {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.records.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        if self.selected_index < self.records.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the history screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = screen_chunks(size, 3);

        let title = Paragraph::new("Session History")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        self.render_list(f, chunks[1]);

        let help = Paragraph::new("↑↓: Navigate | Esc: Back")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[2]);
    }

    fn render_list(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        if self.records.is_empty() {
            let empty = Paragraph::new("No sessions yet. Complete a lesson or quiz!")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .records
            .iter()
            .map(|record| ListItem::new(record.summary()))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} sessions", self.records.len())),
            )
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for HistoryScreen {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::ActivityKind;

    fn sample_records(n: u32) -> Vec<SessionRecord> {
        (0..n)
            .map(|i| SessionRecord::new("swahili", ActivityKind::Lesson, i * 25, 100))
            .collect()
    }

    #[test]
    fn test_empty_history_is_safe() {
        let mut screen = HistoryScreen::default();
        assert!(screen.selected_record().is_none());
        screen.select_next();
        screen.select_previous();
        assert!(screen.selected_record().is_none());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut screen = HistoryScreen::new(sample_records(3));
        assert_eq!(screen.selected_record().unwrap().score, 0);

        screen.select_previous();
        assert_eq!(screen.selected_record().unwrap().score, 50);

        screen.select_next();
        assert_eq!(screen.selected_record().unwrap().score, 0);
    }

    #[test]
    fn test_set_records_resets_selection() {
        let mut screen = HistoryScreen::new(sample_records(3));
        screen.select_next();
        screen.set_records(sample_records(1));
        assert_eq!(screen.selected_record().unwrap().score, 0);
    }
}
