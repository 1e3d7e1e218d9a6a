//! Mock AI chat session
//!
//! Replies are deterministic templates built from the learner's own input;
//! there is no model behind them. Each reply is produced on a spawned task
//! and delivered back through a channel after a short cosmetic delay, so
//! the UI treats the exchange as asynchronous.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Cosmetic delay before a reply is delivered
pub const REPLY_DELAY: Duration = Duration::from_millis(600);

/// Assistant persona offered on the mode-select screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    /// Quick phrase lookups between English and Swahili
    Translator,
    /// Conversation practice with feedback
    Tutor,
}

impl ChatMode {
    pub fn title(&self) -> &'static str {
        match self {
            ChatMode::Translator => "Translator",
            ChatMode::Tutor => "AI Tutor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChatMode::Translator => {
                "Instant translations between English and Swahili. Perfect for quick lookups."
            }
            ChatMode::Tutor => {
                "Practice conversations with your AI tutor. Get feedback and corrections."
            }
        }
    }

    /// Opening message shown when the chat screen is entered
    pub fn greeting(&self) -> &'static str {
        match self {
            ChatMode::Translator => {
                "Hello! I can help you translate between English and Swahili. Just type a phrase!"
            }
            ChatMode::Tutor => {
                "Jambo! I'm your Swahili tutor. Let's practice together! Try introducing yourself."
            }
        }
    }

    pub fn input_placeholder(&self) -> &'static str {
        match self {
            ChatMode::Translator => "Type a phrase to translate...",
            ChatMode::Tutor => "Type your response...",
        }
    }
}

/// Who produced a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One bubble in the chat transcript
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            sender: Sender::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            sender: Sender::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Build the canned reply for a user message. Pure template substitution
/// of the input, by mode.
pub fn compose_reply(mode: ChatMode, input: &str) -> String {
    match mode {
        ChatMode::Translator => {
            format!("Translation: \"{}\" -> \"Tafsiri: {}\"", input, input)
        }
        ChatMode::Tutor => format!(
            "Great! \"{}\" is a good attempt. Here's a tip: remember to use proper greetings \
             like \"Jina langu ni...\" when introducing yourself.",
            input
        ),
    }
}

/// Produces mock replies on spawned tasks and streams them back to the
/// main loop over a channel.
#[derive(Debug, Clone)]
pub struct ChatResponder {
    reply_tx: mpsc::Sender<String>,
}

impl ChatResponder {
    /// Create a responder together with the receiving end the main loop
    /// should poll.
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<String>) {
        let (reply_tx, reply_rx) = mpsc::channel(buffer);
        (Self { reply_tx }, reply_rx)
    }

    /// Queue a reply to the given user input. The composed text arrives on
    /// the receiver after [`REPLY_DELAY`].
    pub fn request(&self, mode: ChatMode, input: &str) {
        let reply = compose_reply(mode, input);
        let tx = self.reply_tx.clone();
        tokio::spawn(async move {
            sleep(REPLY_DELAY).await;
            // Receiver dropped means the chat screen is gone; nothing to do.
            let _ = tx.send(reply).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_reply_echoes_input() {
        let reply = compose_reply(ChatMode::Translator, "good morning");
        assert_eq!(
            reply,
            "Translation: \"good morning\" -> \"Tafsiri: good morning\""
        );

        let tutor = compose_reply(ChatMode::Tutor, "Jina langu ni Asha");
        assert!(tutor.contains("\"Jina langu ni Asha\" is a good attempt"));
    }

    #[test]
    fn test_compose_reply_is_deterministic() {
        let a = compose_reply(ChatMode::Tutor, "habari");
        let b = compose_reply(ChatMode::Tutor, "habari");
        assert_eq!(a, b);
    }

    #[test]
    fn test_message_constructors() {
        let user = ChatMessage::user(1, "hello");
        assert_eq!(user.sender, Sender::User);
        let assistant = ChatMessage::assistant(2, "jambo");
        assert_eq!(assistant.sender, Sender::Assistant);
        assert!(user.timestamp <= assistant.timestamp);
    }

    #[tokio::test]
    async fn test_responder_delivers_composed_reply() {
        let (responder, mut rx) = ChatResponder::new(4);
        responder.request(ChatMode::Translator, "water");
        let reply = rx.recv().await.expect("reply should arrive");
        assert_eq!(reply, compose_reply(ChatMode::Translator, "water"));
    }

    #[tokio::test]
    async fn test_responder_preserves_order_per_request() {
        let (responder, mut rx) = ChatResponder::new(4);
        responder.request(ChatMode::Tutor, "first");
        let first = rx.recv().await.expect("first reply");
        responder.request(ChatMode::Tutor, "second");
        let second = rx.recv().await.expect("second reply");
        assert!(first.contains("first"));
        assert!(second.contains("second"));
    }
}
