//! Quiz screen implementation
//!
//! Select-then-advance question flow with a non-scored skip, followed by
//! a results view with score, accuracy, XP, and a per-question review.
//! Scoring lives in [`crate::session::quiz`].

use crate::content::exercises::QUIZ_QUESTIONS;
use crate::session::quiz::{QuizOutcome, QuizSession};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Events the screen hands back to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    /// Results acknowledged; carries the final score
    Completed(QuizOutcome),
    /// Learner backed out before the results view
    Abandoned,
}

/// Quiz flow component
#[derive(Debug)]
pub struct QuizScreen {
    session: QuizSession,
    option_index: usize,
    list_state: ListState,
}

impl QuizScreen {
    /// Create a new quiz run over the standard question bank
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            session: QuizSession::new(QUIZ_QUESTIONS),
            option_index: 0,
            list_state,
        }
    }

    /// Restart the quiz from the first question
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether the results view is showing
    pub fn is_showing_results(&self) -> bool {
        self.session.is_finished()
    }

    /// Move option selection up
    pub fn select_previous(&mut self) {
        let Some(question) = self.session.current() else {
            return;
        };
        let len = question.options.len();
        self.option_index = (self.option_index + len - 1) % len;
        self.list_state.select(Some(self.option_index));
    }

    /// Move option selection down
    pub fn select_next(&mut self) {
        let Some(question) = self.session.current() else {
            return;
        };
        let len = question.options.len();
        self.option_index = (self.option_index + 1) % len;
        self.list_state.select(Some(self.option_index));
    }

    /// Confirm: submit the highlighted option, or acknowledge results.
    /// The completion event fires exactly once.
    pub fn confirm(&mut self) -> Option<QuizEvent> {
        if let Some(question) = self.session.current() {
            let answer = question.options[self.option_index];
            self.session.submit(answer);
            self.option_index = 0;
            self.list_state.select(Some(0));
            None
        } else {
            self.session.complete().map(QuizEvent::Completed)
        }
    }

    /// Skip the current question without recording an answer
    pub fn skip(&mut self) {
        self.session.skip();
        self.option_index = 0;
        self.list_state.select(Some(0));
    }

    /// Render the quiz screen
    pub fn render(&mut self, f: &mut Frame) {
        if self.session.is_finished() {
            self.render_results(f);
        } else {
            self.render_question(f);
        }
    }

    fn render_question(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress header
                Constraint::Length(4), // Question
                Constraint::Min(6),    // Options
                Constraint::Length(3), // Help
            ])
            .split(size);

        let Some(question) = self.session.current() else {
            return;
        };

        let (position, total) = self.session.position();
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Unit Quiz {}/{}",
                position, total
            )))
            .gauge_style(Style::default().fg(Color::Magenta))
            .ratio(self.session.progress_ratio());
        f.render_widget(gauge, chunks[0]);

        let prompt = Paragraph::new(question.prompt)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} pts", question.points)),
            );
        f.render_widget(prompt, chunks[1]);

        let items: Vec<ListItem> = question
            .options
            .iter()
            .map(|option| ListItem::new(*option))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Options"))
            .highlight_style(Style::default().bg(Color::Magenta).fg(Color::White))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[2], &mut self.list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Answer | S: Skip | Esc: Back")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }

    fn render_results(&self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Banner
                Constraint::Length(4), // Stat cards
                Constraint::Min(6),    // Review
                Constraint::Length(3), // Help
            ])
            .split(size);

        let banner = Paragraph::new("Quiz Complete!")
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(banner, chunks[0]);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(chunks[1]);

        let score = Paragraph::new(format!("{}", self.session.score()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Points"));
        f.render_widget(score, cards[0]);

        let accuracy = Paragraph::new(format!("{}%", self.session.accuracy_percent()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green))
            .block(Block::default().borders(Borders::ALL).title("Accuracy"));
        f.render_widget(accuracy, cards[1]);

        let xp = Paragraph::new(format!("+{}", self.session.score()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Magenta))
            .block(Block::default().borders(Borders::ALL).title("XP Earned"));
        f.render_widget(xp, cards[2]);

        let rows: Vec<Line> = self
            .session
            .review()
            .into_iter()
            .map(|row| {
                let (marker, color) = if row.correct {
                    ("✓", Color::Green)
                } else {
                    ("✗", Color::Red)
                };
                let given = row.given.unwrap_or_else(|| "Not answered".to_string());
                let mut spans = vec![
                    Span::styled(format!("{} ", marker), Style::default().fg(color)),
                    Span::raw(format!("{}  ", row.question.prompt)),
                    Span::styled(format!("Your answer: {}", given), Style::default().fg(color)),
                ];
                if !row.correct {
                    spans.push(Span::styled(
                        format!("  (Correct: {})", row.question.answer),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                Line::from(spans)
            })
            .collect();
        let review = Paragraph::new(rows)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Review Answers"));
        f.render_widget(review, chunks[2]);

        let help = Paragraph::new("Enter: Continue | Esc: Back to Course")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }
}

impl Default for QuizScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_path_to_results() {
        let mut screen = QuizScreen::new();
        assert!(!screen.is_showing_results());

        // Answer every question with the first option.
        for _ in 0..QUIZ_QUESTIONS.len() {
            assert_eq!(screen.confirm(), None);
        }
        assert!(screen.is_showing_results());

        // First options are correct for question 1 only (20 pts).
        match screen.confirm() {
            Some(QuizEvent::Completed(outcome)) => {
                assert_eq!(outcome.score, 20);
                assert_eq!(outcome.max_score, 100);
            }
            other => panic!("expected completion, got {:?}", other),
        }

        // Completion fires exactly once.
        assert_eq!(screen.confirm(), None);
    }

    #[test]
    fn test_skip_advances_without_scoring() {
        let mut screen = QuizScreen::new();
        for _ in 0..QUIZ_QUESTIONS.len() {
            screen.skip();
        }
        assert!(screen.is_showing_results());
        match screen.confirm() {
            Some(QuizEvent::Completed(outcome)) => assert_eq!(outcome.score, 0),
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_option_navigation_wraps() {
        let mut screen = QuizScreen::new();
        screen.select_previous();
        assert_eq!(screen.option_index, 3);
        screen.select_next();
        assert_eq!(screen.option_index, 0);
    }

    #[test]
    fn test_selection_resets_between_questions() {
        let mut screen = QuizScreen::new();
        screen.select_next();
        assert_eq!(screen.option_index, 1);
        screen.confirm();
        assert_eq!(screen.option_index, 0);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut screen = QuizScreen::new();
        screen.skip();
        screen.reset();
        assert!(!screen.is_showing_results());
        assert_eq!(screen.session.position(), (1, QUIZ_QUESTIONS.len()));
    }
}
