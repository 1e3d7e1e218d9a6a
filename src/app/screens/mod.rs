//! TUI screen components
//!
//! Contains individual screen implementations for different application
//! states.

pub mod auth;
pub mod chat;
pub mod course;
pub mod dashboard;
pub mod history;
pub mod language;
pub mod lesson;
pub mod onboarding;
pub mod proficiency;
pub mod quiz;

pub use auth::{AuthEvent, AuthMode, AuthScreen};
pub use chat::{ChatEvent, ChatModeScreen, ChatScreen};
pub use course::{CourseEvent, CourseScreen};
pub use dashboard::{DashboardScreen, QuickAction};
pub use history::HistoryScreen;
pub use language::{LanguageEvent, LanguageScreen};
pub use lesson::{LessonEvent, LessonScreen};
pub use onboarding::{OnboardingEvent, OnboardingScreen};
pub use proficiency::{ProficiencyEvent, ProficiencyScreen};
pub use quiz::{QuizEvent, QuizScreen};
