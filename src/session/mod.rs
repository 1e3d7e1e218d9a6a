//! Interactive session logic
//!
//! The state machines behind the graded lesson flow, the unit quiz, and
//! the mock AI chat. Screens in [`crate::app::screens`] render these and
//! feed them user input; nothing here touches the terminal.

pub mod chat;
pub mod lesson;
pub mod quiz;

pub use chat::{compose_reply, ChatMessage, ChatMode, ChatResponder, Sender};
pub use lesson::{is_correct, LessonOutcome, LessonPhase, LessonSession, POINTS_PER_EXERCISE};
pub use quiz::{QuizOutcome, QuizReviewRow, QuizSession};
