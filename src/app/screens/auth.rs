//! Authentication screens implementation
//!
//! Sign-in and sign-up forms. Field values are collected locally and
//! discarded on submit; there is no backend. Submit requires every field
//! to be non-empty, mirroring native required-field validation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Which form is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Create Account",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }

    fn switch_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account? Sign Up",
            AuthMode::SignUp => "Already have an account? Sign In",
        }
    }

    fn field_labels(&self) -> &'static [&'static str] {
        match self {
            AuthMode::SignIn => &["Email", "Password"],
            AuthMode::SignUp => &["Name", "Email", "Password"],
        }
    }
}

/// One text field in the form
#[derive(Debug, Clone)]
struct Field {
    label: &'static str,
    value: String,
    masked: bool,
}

impl Field {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: label == "Password",
        }
    }

    fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Events the form hands back to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// All fields filled and submit confirmed
    Submitted,
    /// Toggle between sign-in and sign-up
    SwitchMode,
    /// Leave the form
    Back,
}

/// Authentication form component
#[derive(Debug)]
pub struct AuthScreen {
    mode: AuthMode,
    fields: Vec<Field>,
    /// Focus index over fields, then the submit row, then the switch row
    focus: usize,
}

impl AuthScreen {
    /// Create a new form in the given mode
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            fields: mode.field_labels().iter().map(|&l| Field::new(l)).collect(),
            focus: 0,
        }
    }

    /// Current form mode
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switch modes, discarding anything typed so far
    pub fn set_mode(&mut self, mode: AuthMode) {
        *self = Self::new(mode);
    }

    fn submit_index(&self) -> usize {
        self.fields.len()
    }

    fn switch_index(&self) -> usize {
        self.fields.len() + 1
    }

    fn focus_count(&self) -> usize {
        self.fields.len() + 2
    }

    /// Whether every field has a value
    pub fn can_submit(&self) -> bool {
        self.fields.iter().all(|f| !f.value.is_empty())
    }

    /// Value of a field by label, for tests and logging
    #[cfg(test)]
    fn field_value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.focus_count();
    }

    fn focus_previous(&mut self) {
        self.focus = (self.focus + self.focus_count() - 1) % self.focus_count();
    }

    /// Handle a raw key event; typing must never trigger global shortcuts
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<AuthEvent> {
        match key.code {
            KeyCode::Esc => return Some(AuthEvent::Back),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Enter => {
                if self.focus < self.fields.len() {
                    self.focus_next();
                } else if self.focus == self.submit_index() {
                    if self.can_submit() {
                        return Some(AuthEvent::Submitted);
                    }
                } else {
                    return Some(AuthEvent::SwitchMode);
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.value.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.value.pop();
                }
            }
            _ => {}
        }
        None
    }

    /// Render the form
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();
        let mut constraints = vec![Constraint::Length(3)]; // Title
        constraints.extend(self.fields.iter().map(|_| Constraint::Length(3)));
        constraints.push(Constraint::Length(3)); // Submit
        constraints.push(Constraint::Length(3)); // Switch
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(3)); // Help

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints(constraints)
            .split(size);

        self.render_title(f, chunks[0]);

        for (i, field) in self.fields.iter().enumerate() {
            let focused = self.focus == i;
            let style = if focused {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .title(field.label)
                .border_style(style);
            let text = if focused {
                format!("{}▏", field.display_value())
            } else {
                field.display_value()
            };
            f.render_widget(Paragraph::new(text).block(block), chunks[1 + i]);
        }

        let submit_focused = self.focus == self.submit_index();
        let submit_style = if submit_focused {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else if self.can_submit() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let submit = Paragraph::new(format!("[ {} ]", self.mode.submit_label()))
            .style(submit_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(submit, chunks[1 + self.fields.len()]);

        let switch_focused = self.focus == self.switch_index();
        let switch_style = if switch_focused {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let switch = Paragraph::new(self.mode.switch_label())
            .style(switch_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(switch, chunks[2 + self.fields.len()]);

        let help = Paragraph::new("Tab: Next field | Enter: Confirm | Esc: Back")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[4 + self.fields.len()]);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title = Paragraph::new(self.mode.title())
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(screen: &mut AuthScreen, s: &str) {
        for c in s.chars() {
            screen.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut screen = AuthScreen::new(AuthMode::SignIn);
        type_str(&mut screen, "kwame@example.com");
        assert_eq!(
            screen.field_value("Email"),
            Some("kwame@example.com")
        );

        screen.handle_key_event(key(KeyCode::Tab));
        type_str(&mut screen, "hunter2");
        assert_eq!(screen.field_value("Password"), Some("hunter2"));
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut screen = AuthScreen::new(AuthMode::SignIn);
        type_str(&mut screen, "abc");
        screen.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(screen.field_value("Email"), Some("ab"));
    }

    #[test]
    fn test_submit_requires_all_fields() {
        let mut screen = AuthScreen::new(AuthMode::SignIn);
        assert!(!screen.can_submit());

        type_str(&mut screen, "a@b.c");
        screen.handle_key_event(key(KeyCode::Enter)); // move to password
        assert!(!screen.can_submit());

        // Submit row does nothing while the password is empty.
        screen.handle_key_event(key(KeyCode::Enter)); // focus submit
        assert_eq!(screen.handle_key_event(key(KeyCode::Enter)), None);

        screen.handle_key_event(key(KeyCode::BackTab)); // back to password
        type_str(&mut screen, "pw");
        assert!(screen.can_submit());

        screen.handle_key_event(key(KeyCode::Tab)); // focus submit
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter)),
            Some(AuthEvent::Submitted)
        );
    }

    #[test]
    fn test_signup_has_name_field() {
        let screen = AuthScreen::new(AuthMode::SignUp);
        assert_eq!(screen.fields.len(), 3);
        assert_eq!(screen.fields[0].label, "Name");
    }

    #[test]
    fn test_switch_mode_resets_fields() {
        let mut screen = AuthScreen::new(AuthMode::SignIn);
        type_str(&mut screen, "something");
        screen.set_mode(AuthMode::SignUp);
        assert_eq!(screen.mode(), AuthMode::SignUp);
        assert!(screen.fields.iter().all(|f| f.value.is_empty()));
        assert_eq!(screen.focus, 0);
    }

    #[test]
    fn test_switch_row_emits_switch_event() {
        let mut screen = AuthScreen::new(AuthMode::SignIn);
        screen.handle_key_event(key(KeyCode::BackTab)); // wrap to switch row
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter)),
            Some(AuthEvent::SwitchMode)
        );
    }

    #[test]
    fn test_escape_leaves_the_form() {
        let mut screen = AuthScreen::new(AuthMode::SignIn);
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Esc)),
            Some(AuthEvent::Back)
        );
    }

    #[test]
    fn test_q_is_just_a_character_here() {
        let mut screen = AuthScreen::new(AuthMode::SignIn);
        assert_eq!(screen.handle_key_event(key(KeyCode::Char('q'))), None);
        assert_eq!(screen.field_value("Email"), Some("q"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut screen = AuthScreen::new(AuthMode::SignIn);
        screen.handle_key_event(key(KeyCode::Tab));
        type_str(&mut screen, "secret");
        let field = &screen.fields[1];
        assert!(field.masked);
        assert_eq!(field.display_value(), "••••••");
    }
}
