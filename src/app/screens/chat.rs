//! Chat screens implementation
//!
//! Mode selection plus the chat transcript. Replies come from
//! [`crate::session::chat`] through the app's reply channel; this screen
//! only renders the transcript and collects input.

use crate::session::chat::{ChatMessage, ChatMode, Sender};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Events the chat screens hand back to the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// A mode was picked on the selection screen
    ModeChosen(ChatMode),
    /// The learner sent a message; the app should request a reply
    Send(String),
    /// Leave the current screen
    Back,
}

const MODES: &[ChatMode] = &[ChatMode::Translator, ChatMode::Tutor];

/// Assistant mode selection component
#[derive(Debug)]
pub struct ChatModeScreen {
    selected_index: usize,
    list_state: ListState,
}

impl ChatModeScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    /// The highlighted mode
    pub fn selected_mode(&self) -> ChatMode {
        MODES[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        self.selected_index = (self.selected_index + MODES.len() - 1) % MODES.len();
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % MODES.len();
        self.list_state.select(Some(self.selected_index));
    }

    /// Confirm the highlighted mode
    pub fn choose(&self) -> ChatEvent {
        ChatEvent::ModeChosen(self.selected_mode())
    }

    /// Render the mode selection screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(size);

        let title = Paragraph::new("AI Language Assistant")
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = MODES
            .iter()
            .map(|mode| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        mode.title(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("  {}", mode.description()),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Choose how you'd like to practice"),
            )
            .highlight_style(Style::default().bg(Color::Magenta).fg(Color::White))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | Esc: Back")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[2]);
    }
}

impl Default for ChatModeScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Chat transcript component
#[derive(Debug)]
pub struct ChatScreen {
    mode: ChatMode,
    messages: Vec<ChatMessage>,
    input: String,
    next_id: u64,
    /// Replies requested but not yet delivered
    pending_replies: usize,
}

impl ChatScreen {
    /// Create a chat in the given mode, seeded with its greeting
    pub fn new(mode: ChatMode) -> Self {
        Self {
            mode,
            messages: vec![ChatMessage::assistant(1, mode.greeting())],
            input: String::new(),
            next_id: 2,
            pending_replies: 0,
        }
    }

    /// Restart the transcript in a (possibly different) mode. History is
    /// per-visit only.
    pub fn enter_mode(&mut self, mode: ChatMode) {
        *self = Self::new(mode);
    }

    /// Current chat mode
    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    /// Transcript so far
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a reply is still on its way
    pub fn is_waiting(&self) -> bool {
        self.pending_replies > 0
    }

    /// Append a delivered assistant reply
    pub fn push_assistant(&mut self, text: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage::assistant(id, text));
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }

    /// Handle a raw key event; characters go to the input box
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<ChatEvent> {
        match key.code {
            KeyCode::Esc => return Some(ChatEvent::Back),
            KeyCode::Enter => {
                let text = self.input.trim().to_string();
                if text.is_empty() {
                    return None;
                }
                let id = self.next_id;
                self.next_id += 1;
                self.messages.push(ChatMessage::user(id, text.clone()));
                self.input.clear();
                self.pending_replies += 1;
                return Some(ChatEvent::Send(text));
            }
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            _ => {}
        }
        None
    }

    /// Render the chat screen
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(6),    // Transcript
                Constraint::Length(3), // Input
                Constraint::Length(3), // Help
            ])
            .split(size);

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                self.mode.title(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Powered by Polie AI", Style::default().fg(Color::Gray)),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, chunks[0]);

        self.render_transcript(f, chunks[1]);

        let input = Paragraph::new(if self.input.is_empty() {
            Line::from(Span::styled(
                self.mode.input_placeholder(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(format!("{}▏", self.input))
        })
        .block(Block::default().borders(Borders::ALL).title("Message"));
        f.render_widget(input, chunks[2]);

        let help = Paragraph::new("Enter: Send | Esc: Back")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }

    fn render_transcript(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let mut lines: Vec<Line> = Vec::new();
        for message in &self.messages {
            match message.sender {
                Sender::Assistant => {
                    lines.push(Line::from(vec![
                        Span::styled(
                            "Polie AI ",
                            Style::default()
                                .fg(Color::Magenta)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            message.timestamp.format("%H:%M").to_string(),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]));
                    lines.push(Line::from(format!("  {}", message.text)));
                }
                Sender::User => {
                    lines.push(Line::from(vec![
                        Span::styled(
                            "You ",
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            message.timestamp.format("%H:%M").to_string(),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]));
                    lines.push(Line::from(format!("  {}", message.text)));
                }
            }
            lines.push(Line::from(""));
        }
        if self.is_waiting() {
            lines.push(Line::from(Span::styled(
                "Polie AI is typing...",
                Style::default().fg(Color::DarkGray),
            )));
        }

        // Keep the tail of the transcript in view.
        let visible = area.height.saturating_sub(2) as usize;
        let skip = lines.len().saturating_sub(visible);
        let transcript = Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(transcript, area);
    }
}
