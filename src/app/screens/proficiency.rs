//! Proficiency selection screen implementation
//!
//! Three literal levels with a feature list for the highlighted one.
//! Confirming carries the chosen level back to the app.

use crate::content::catalog::{Language, ProficiencyLevel, PROFICIENCY_LEVELS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Events the screen hands back to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProficiencyEvent {
    Chosen(&'static ProficiencyLevel),
    Back,
}

/// Proficiency selection component
#[derive(Debug)]
pub struct ProficiencyScreen {
    language: Option<&'static Language>,
    selected_index: usize,
    list_state: ListState,
}

impl ProficiencyScreen {
    /// Create a new proficiency screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            language: None,
            selected_index: 0,
            list_state,
        }
    }

    /// Set the language being configured, for the header
    pub fn set_language(&mut self, language: &'static Language) {
        self.language = Some(language);
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    /// The highlighted level
    pub fn selected_level(&self) -> &'static ProficiencyLevel {
        &PROFICIENCY_LEVELS[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = PROFICIENCY_LEVELS.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < PROFICIENCY_LEVELS.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Confirm the highlighted level
    pub fn choose(&self) -> ProficiencyEvent {
        ProficiencyEvent::Chosen(self.selected_level())
    }

    /// Render the proficiency screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(7), // Level list
                Constraint::Min(6),    // Feature detail
                Constraint::Length(3), // Help
            ])
            .split(size);

        let heading = match self.language {
            Some(language) => format!("Your {} Level", language.name),
            None => "Your Level".to_string(),
        };
        let title = Paragraph::new(heading)
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = PROFICIENCY_LEVELS
            .iter()
            .map(|level| {
                ListItem::new(format!("{:<14} {}", level.title, level.description))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Select your current proficiency level"),
            )
            .highlight_style(Style::default().bg(Color::Magenta).fg(Color::White))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let level = self.selected_level();
        let features: Vec<Line> = level
            .features
            .iter()
            .map(|feature| Line::from(format!("  • {}", feature)))
            .collect();
        let detail = Paragraph::new(features).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("What {} includes", level.title)),
        );
        f.render_widget(detail, chunks[2]);

        let help = Paragraph::new("↑↓: Navigate | Enter: Continue | Esc: Back")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }
}

impl Default for ProficiencyScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_beginner() {
        let screen = ProficiencyScreen::new();
        assert_eq!(screen.selected_level().id, "beginner");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut screen = ProficiencyScreen::new();
        screen.select_previous();
        assert_eq!(screen.selected_level().id, "expert");
        screen.select_next();
        assert_eq!(screen.selected_level().id, "beginner");
        screen.select_next();
        assert_eq!(screen.selected_level().id, "intermediate");
    }

    #[test]
    fn test_choose_emits_highlighted_level() {
        let mut screen = ProficiencyScreen::new();
        screen.select_next();
        match screen.choose() {
            ProficiencyEvent::Chosen(level) => assert_eq!(level.id, "intermediate"),
            other => panic!("expected chosen level, got {:?}", other),
        }
    }

    #[test]
    fn test_set_language_resets_selection() {
        let mut screen = ProficiencyScreen::new();
        screen.select_next();
        screen.set_language(crate::content::catalog::find("zulu").unwrap());
        assert_eq!(screen.selected_level().id, "beginner");
    }
}
