//! Language selection screen implementation
//!
//! Searchable catalog list. Typing filters by name, native name, or
//! region (case-insensitive substring); confirming a selection carries the
//! language into the proficiency screen.

use crate::content::catalog::{self, Difficulty, Language};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Events the screen hands back to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageEvent {
    Selected(&'static Language),
    Back,
}

/// Language selection component with search
#[derive(Debug)]
pub struct LanguageScreen {
    query: String,
    results: Vec<&'static Language>,
    selected_index: usize,
    list_state: ListState,
}

impl LanguageScreen {
    /// Create a new selection screen showing the full catalog
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            query: String::new(),
            results: catalog::search(""),
            selected_index: 0,
            list_state,
        }
    }

    /// Current search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Languages matching the current query
    pub fn results(&self) -> &[&'static Language] {
        &self.results
    }

    /// The highlighted language, if the result list is non-empty
    pub fn selected(&self) -> Option<&'static Language> {
        self.results.get(self.selected_index).copied()
    }

    fn refresh_results(&mut self) {
        self.results = catalog::search(&self.query);
        self.selected_index = 0;
        self.list_state
            .select(if self.results.is_empty() { None } else { Some(0) });
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.results.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.selected_index < self.results.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Handle a raw key event; characters go to the search box
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<LanguageEvent> {
        match key.code {
            KeyCode::Esc => return Some(LanguageEvent::Back),
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Enter => {
                if let Some(language) = self.selected() {
                    return Some(LanguageEvent::Selected(language));
                }
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.refresh_results();
            }
            KeyCode::Backspace => {
                if self.query.pop().is_some() {
                    self.refresh_results();
                }
            }
            _ => {}
        }
        None
    }

    /// Render the language selection screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([
                ratatui::layout::Constraint::Length(3), // Title
                ratatui::layout::Constraint::Length(3), // Search box
                ratatui::layout::Constraint::Min(6),    // Results
                ratatui::layout::Constraint::Length(3), // Help
            ])
            .split(size);

        let title = Paragraph::new("Choose Your Language")
            .style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let search = Paragraph::new(format!("{}▏", self.query)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search languages"),
        );
        f.render_widget(search, chunks[1]);

        self.render_results(f, chunks[2]);

        let help = Paragraph::new("Type to search | ↑↓: Navigate | Enter: Select | Esc: Back")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }

    fn render_results(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        if self.results.is_empty() {
            let empty = Paragraph::new(format!(
                "No languages found matching \"{}\"",
                self.query
            ))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .results
            .iter()
            .map(|language| {
                let difficulty_color = match language.difficulty {
                    Difficulty::Beginner => Color::Green,
                    Difficulty::Intermediate => Color::Yellow,
                    Difficulty::Advanced => Color::Red,
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", language.flag)),
                    Span::styled(
                        format!("{:<10}", language.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:<16}", language.native_name),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        format!("{:<16}", language.region),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        format!("{:<13}", language.difficulty.label()),
                        Style::default().fg(difficulty_color),
                    ),
                    Span::styled(
                        format!("{} speakers", language.speakers),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(format!(
                "{} of {} languages",
                self.results.len(),
                catalog::LANGUAGES.len()
            )))
            .highlight_style(Style::default().bg(Color::Red).fg(Color::White))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for LanguageScreen {
    fn default() -> Self {
        Self::new()
    }
}
