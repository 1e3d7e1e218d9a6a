//! Lesson screen implementation
//!
//! Renders the graded exercise sequence: option lists for choice
//! exercises, a text box for translation and fill-in exercises, a frozen
//! feedback card after each check, and the running score. All scoring
//! rules live in [`crate::session::lesson`].

use crate::content::exercises::{Exercise, LESSON_EXERCISES};
use crate::session::lesson::{LessonOutcome, LessonPhase, LessonSession};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Events the screen hands back to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonEvent {
    /// Sequence finished; carries the final score
    Completed(LessonOutcome),
    /// Learner backed out mid-lesson
    Abandoned,
}

/// Lesson flow component
#[derive(Debug)]
pub struct LessonScreen {
    session: LessonSession,
    /// Typed answer for text-entry exercises
    answer: String,
    /// Highlighted option for choice exercises; none until a first pick
    option_index: Option<usize>,
    list_state: ListState,
}

impl LessonScreen {
    /// Create a new lesson run over the standard exercise bank
    pub fn new() -> Self {
        Self {
            session: LessonSession::new(LESSON_EXERCISES),
            answer: String::new(),
            option_index: None,
            list_state: ListState::default(),
        }
    }

    /// Restart the lesson from the first exercise
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Running score, for the header
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    /// The candidate answer assembled from the current input state
    fn candidate_answer(&self) -> Option<String> {
        let exercise = self.session.current()?;
        if exercise.kind.is_text_entry() {
            if self.answer.is_empty() {
                None
            } else {
                Some(self.answer.clone())
            }
        } else {
            self.option_index
                .and_then(|i| exercise.options.get(i))
                .map(|s| s.to_string())
        }
    }

    fn move_option(&mut self, down: bool) {
        let Some(exercise) = self.session.current() else {
            return;
        };
        if exercise.kind.is_text_entry() || self.session.phase() != LessonPhase::Answering {
            return;
        }
        let len = exercise.options.len();
        if len == 0 {
            return;
        }
        let next = match (self.option_index, down) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.option_index = Some(next);
        self.list_state.select(Some(next));
    }

    fn clear_input(&mut self) {
        self.answer.clear();
        self.option_index = None;
        self.list_state.select(None);
    }

    /// Handle a raw key event; characters go to the answer box
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<LessonEvent> {
        match key.code {
            KeyCode::Esc => return Some(LessonEvent::Abandoned),
            KeyCode::Up => self.move_option(false),
            KeyCode::Down => self.move_option(true),
            KeyCode::Enter => match self.session.phase() {
                LessonPhase::Answering => {
                    // Check is disabled until there is a candidate answer.
                    if let Some(answer) = self.candidate_answer() {
                        self.session.check(&answer);
                    }
                }
                LessonPhase::Feedback { .. } => {
                    if let Some(outcome) = self.session.advance() {
                        return Some(LessonEvent::Completed(outcome));
                    }
                    self.clear_input();
                }
                LessonPhase::Complete => {}
            },
            KeyCode::Char(c) => {
                if self.session.phase() == LessonPhase::Answering {
                    if let Some(exercise) = self.session.current() {
                        if exercise.kind.is_text_entry() {
                            self.answer.push(c);
                        }
                    }
                }
            }
            KeyCode::Backspace => {
                if self.session.phase() == LessonPhase::Answering {
                    self.answer.pop();
                }
            }
            _ => {}
        }
        None
    }

    /// Render the lesson screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress + score header
                Constraint::Length(4), // Prompt
                Constraint::Min(6),    // Answer area
                Constraint::Length(4), // Feedback
                Constraint::Length(3), // Help
            ])
            .split(size);

        self.render_header(f, chunks[0]);

        let Some(exercise) = self.session.current() else {
            return;
        };

        self.render_prompt(f, chunks[1], exercise);
        self.render_answer_area(f, chunks[2], exercise);
        self.render_feedback(f, chunks[3], exercise);
        self.render_help(f, chunks[4]);
    }

    fn render_header(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(14)])
            .split(area);

        let (position, total) = self.session.position();
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Exercise {}/{}",
                position, total
            )))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(self.session.progress_ratio());
        f.render_widget(gauge, columns[0]);

        let score = Paragraph::new(format!("★ {}", self.session.score()))
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Score"));
        f.render_widget(score, columns[1]);
    }

    fn render_prompt(&self, f: &mut Frame, area: ratatui::layout::Rect, exercise: &Exercise) {
        let prompt = Paragraph::new(exercise.prompt)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(exercise.kind.label()),
            );
        f.render_widget(prompt, area);
    }

    fn render_answer_area(
        &mut self,
        f: &mut Frame,
        area: ratatui::layout::Rect,
        exercise: &Exercise,
    ) {
        if exercise.kind.is_text_entry() {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(area);

            let input = Paragraph::new(format!("{}▏", self.answer)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Type your answer"),
            );
            f.render_widget(input, rows[0]);

            if let Some(hint) = exercise.hint {
                let hint = Paragraph::new(hint)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center);
                f.render_widget(hint, rows[1]);
            }
        } else {
            let items: Vec<ListItem> = exercise
                .options
                .iter()
                .map(|option| ListItem::new(*option))
                .collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Options"))
                .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black))
                .highlight_symbol(">> ");
            f.render_stateful_widget(list, area, &mut self.list_state);
        }
    }

    fn render_feedback(&self, f: &mut Frame, area: ratatui::layout::Rect, exercise: &Exercise) {
        let LessonPhase::Feedback { correct } = self.session.phase() else {
            return;
        };

        let (message, color) = if correct {
            ("Excellent!".to_string(), Color::Green)
        } else {
            (
                format!("Not quite right. Correct answer: {}", exercise.answer),
                Color::Red,
            )
        };
        let feedback = Paragraph::new(message)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(feedback, area);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let text = match self.session.phase() {
            LessonPhase::Answering => "Enter: Check Answer | Esc: Leave lesson",
            LessonPhase::Feedback { .. } => {
                if self.session.is_last() {
                    "Enter: Complete Lesson | Esc: Leave lesson"
                } else {
                    "Enter: Continue | Esc: Leave lesson"
                }
            }
            LessonPhase::Complete => "",
        };
        let line = vec![Line::from(vec![Span::raw(text)])];
        let help = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, area);
    }
}

impl Default for LessonScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(screen: &mut LessonScreen, s: &str) {
        for c in s.chars() {
            screen.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_without_answer_is_ignored() {
        let mut screen = LessonScreen::new();
        assert_eq!(screen.handle_key_event(key(KeyCode::Enter)), None);
        assert_eq!(screen.session.phase(), LessonPhase::Answering);
        assert_eq!(screen.score(), 0);
    }

    #[test]
    fn test_typing_is_ignored_on_choice_exercises() {
        let mut screen = LessonScreen::new();
        type_str(&mut screen, "Hello");
        assert!(screen.answer.is_empty());
        assert_eq!(screen.candidate_answer(), None);
    }

    #[test]
    fn test_option_selection_freezes_after_check() {
        let mut screen = LessonScreen::new();
        screen.handle_key_event(key(KeyCode::Down)); // "Goodbye"
        screen.handle_key_event(key(KeyCode::Enter)); // check, incorrect
        assert_eq!(
            screen.session.phase(),
            LessonPhase::Feedback { correct: false }
        );

        // Selection cannot change while feedback is shown.
        screen.handle_key_event(key(KeyCode::Down));
        assert_eq!(screen.option_index, Some(0));
    }

    #[test]
    fn test_full_lesson_flow_scores_75() {
        let mut screen = LessonScreen::new();

        // Exercise 1 (multiple choice): pick "Hello" (index 1), correct.
        screen.handle_key_event(key(KeyCode::Down));
        screen.handle_key_event(key(KeyCode::Down));
        screen.handle_key_event(key(KeyCode::Enter));
        assert_eq!(screen.score(), 25);
        assert_eq!(screen.handle_key_event(key(KeyCode::Enter)), None);

        // Exercise 2 (translation): answer "Good", incorrect.
        type_str(&mut screen, "Good");
        screen.handle_key_event(key(KeyCode::Enter));
        assert_eq!(screen.score(), 25);
        assert_eq!(screen.handle_key_event(key(KeyCode::Enter)), None);

        // Input was cleared for the next exercise.
        assert!(screen.answer.is_empty());

        // Exercise 3 (fill blank): answer "NAME", correct case-insensitively.
        type_str(&mut screen, "NAME");
        screen.handle_key_event(key(KeyCode::Enter));
        assert_eq!(screen.score(), 50);
        assert_eq!(screen.handle_key_event(key(KeyCode::Enter)), None);

        // Exercise 4 (listening): pick "Asante sana" (index 0), correct.
        screen.handle_key_event(key(KeyCode::Down));
        screen.handle_key_event(key(KeyCode::Enter));
        assert_eq!(screen.score(), 75);

        // Final advance completes with the accumulated score, exactly once.
        match screen.handle_key_event(key(KeyCode::Enter)) {
            Some(LessonEvent::Completed(outcome)) => {
                assert_eq!(outcome.score, 75);
                assert_eq!(outcome.max_score, 100);
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert_eq!(screen.handle_key_event(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_escape_abandons() {
        let mut screen = LessonScreen::new();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Esc)),
            Some(LessonEvent::Abandoned)
        );
    }

    #[test]
    fn test_reset_starts_over() {
        let mut screen = LessonScreen::new();
        screen.handle_key_event(key(KeyCode::Down));
        screen.handle_key_event(key(KeyCode::Down));
        screen.handle_key_event(key(KeyCode::Enter));
        assert_eq!(screen.score(), 25);

        screen.reset();
        assert_eq!(screen.score(), 0);
        assert_eq!(screen.session.position(), (1, 4));
    }
}
