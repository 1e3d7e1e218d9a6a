//! Course overview screen implementation
//!
//! The unit and lesson tree with overall progress. Only the current
//! lesson of an unlocked unit (or an already completed one) can be
//! started; locked rows show a notice instead.

use crate::content::catalog::Language;
use crate::content::course::{self, LessonEntry, LessonKind, LessonStatus, Unit, UNITS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Events the screen hands back to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseEvent {
    StartLesson,
    StartQuiz,
    Back,
}

/// Course overview component
#[derive(Debug)]
pub struct CourseScreen {
    language: Option<&'static Language>,
    /// Flattened (unit, lesson) rows in course order
    rows: Vec<(&'static Unit, &'static LessonEntry)>,
    selected_index: usize,
    list_state: ListState,
    notice: Option<String>,
}

impl CourseScreen {
    /// Create a new course screen over the course tree
    pub fn new() -> Self {
        let rows: Vec<(&'static Unit, &'static LessonEntry)> = UNITS
            .iter()
            .flat_map(|unit| unit.lessons.iter().map(move |lesson| (unit, lesson)))
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        let mut screen = Self {
            language: None,
            rows,
            selected_index: 0,
            list_state,
            notice: None,
        };
        screen.select_current_lesson();
        screen
    }

    /// Set the language shown in the header
    pub fn set_language(&mut self, language: &'static Language) {
        self.language = Some(language);
        self.notice = None;
        self.select_current_lesson();
    }

    /// Jump the highlight to the lesson the learner should take next
    fn select_current_lesson(&mut self) {
        if let Some(index) = self
            .rows
            .iter()
            .position(|(_, lesson)| lesson.status == LessonStatus::Current)
        {
            self.selected_index = index;
            self.list_state.select(Some(index));
        }
    }

    /// The highlighted row
    pub fn selected(&self) -> (&'static Unit, &'static LessonEntry) {
        self.rows[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        self.notice = None;
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.rows.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        self.notice = None;
        if self.selected_index < self.rows.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Try to start the highlighted row. Locked rows set a notice and
    /// return nothing.
    pub fn activate(&mut self) -> Option<CourseEvent> {
        let (unit, lesson) = self.selected();
        if !course::is_startable(unit, lesson) {
            self.notice = Some("Complete earlier lessons to unlock this one".to_string());
            return None;
        }
        self.notice = None;
        match lesson.kind {
            LessonKind::Quiz => Some(CourseEvent::StartQuiz),
            _ => Some(CourseEvent::StartLesson),
        }
    }

    /// Render the course overview
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Overall progress
                Constraint::Min(8),    // Lesson rows
                Constraint::Length(3), // Help / notice
            ])
            .split(size);

        let heading = match self.language {
            Some(language) => format!("{} {} Course", language.flag, language.name),
            None => "Course".to_string(),
        };
        let title = Paragraph::new(heading)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let progress = course::overall_progress();
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Overall Progress"))
            .gauge_style(Style::default().fg(Color::Green))
            .percent(u16::from(progress));
        f.render_widget(gauge, chunks[1]);

        self.render_rows(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_rows(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|(unit, lesson)| {
                let (marker, marker_color) = match lesson.status {
                    LessonStatus::Completed => ("✓", Color::Green),
                    LessonStatus::Current => ("▶", Color::Yellow),
                    LessonStatus::Locked => ("🔒", Color::DarkGray),
                };
                let row_style = if lesson.status == LessonStatus::Locked {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
                    Span::styled(format!("{:<28}", lesson.title), row_style),
                    Span::styled(
                        format!("{:<10}", lesson.kind.label()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        format!("{:<8}", lesson.duration),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(format!("{} XP", lesson.xp), Style::default().fg(Color::Yellow)),
                    Span::styled(
                        format!("   {}", unit.title),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Learning Path"))
            .highlight_style(Style::default().bg(Color::Green).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let text = match &self.notice {
            Some(notice) => notice.clone(),
            None => "↑↓: Navigate | Enter: Start | Esc: Back".to_string(),
        };
        let style = if self.notice.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        let help = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, area);
    }
}

impl Default for CourseScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_every_lesson() {
        let screen = CourseScreen::new();
        let total: usize = UNITS.iter().map(|u| u.lessons.len()).sum();
        assert_eq!(screen.rows.len(), total);
    }

    #[test]
    fn test_starts_on_the_current_lesson() {
        let screen = CourseScreen::new();
        let (_, lesson) = screen.selected();
        assert_eq!(lesson.status, LessonStatus::Current);
    }

    #[test]
    fn test_activate_current_lesson_starts_it() {
        let mut screen = CourseScreen::new();
        assert_eq!(screen.activate(), Some(CourseEvent::StartLesson));
        assert!(screen.notice.is_none());
    }

    #[test]
    fn test_activate_locked_row_sets_notice() {
        let mut screen = CourseScreen::new();
        // Move to a row inside the locked Unit 3.
        let locked_index = screen
            .rows
            .iter()
            .position(|(unit, _)| !unit.unlocked)
            .unwrap();
        screen.selected_index = locked_index;
        assert_eq!(screen.activate(), None);
        assert!(screen.notice.is_some());
    }

    #[test]
    fn test_activate_completed_quiz_starts_quiz() {
        let mut screen = CourseScreen::new();
        let quiz_index = screen
            .rows
            .iter()
            .position(|(unit, lesson)| {
                unit.unlocked
                    && lesson.kind == LessonKind::Quiz
                    && lesson.status == LessonStatus::Completed
            })
            .unwrap();
        screen.selected_index = quiz_index;
        assert_eq!(screen.activate(), Some(CourseEvent::StartQuiz));
    }

    #[test]
    fn test_navigation_wraps_and_clears_notice() {
        let mut screen = CourseScreen::new();
        screen.notice = Some("x".to_string());
        screen.selected_index = 0;
        screen.select_previous();
        assert!(screen.notice.is_none());
        assert_eq!(screen.selected_index, screen.rows.len() - 1);
        screen.select_next();
        assert_eq!(screen.selected_index, 0);
    }
}
