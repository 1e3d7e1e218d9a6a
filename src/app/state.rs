//! Application state management
//!
//! Handles screen transitions, navigation logic, and keyboard event
//! processing for the TUI application. Screens that need data carry it in
//! their variant, so navigating to a screen whose data was never set is
//! not representable.

use crate::content::catalog::Language;
use crate::session::chat::ChatMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens/states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Welcome carousel shown on first launch
    Onboarding,
    /// Sign-in form
    SignIn,
    /// Sign-up form
    SignUp,
    /// Language catalog with search
    LanguageSelect,
    /// Proficiency choice for the picked language
    Proficiency { language: &'static Language },
    /// Home screen with stats and quick actions
    Dashboard,
    /// Unit and lesson tree
    Course { language: &'static Language },
    /// Graded exercise sequence
    Lesson { language: &'static Language },
    /// Unit quiz with skip
    Quiz { language: &'static Language },
    /// Chat assistant mode choice
    ChatSelect,
    /// Chat with the chosen assistant
    Chat { mode: ChatMode },
    /// Past lesson and quiz sessions
    History,
}

impl AppState {
    /// The language this state carries, if any
    pub fn language(&self) -> Option<&'static Language> {
        match self {
            AppState::Proficiency { language }
            | AppState::Course { language }
            | AppState::Lesson { language }
            | AppState::Quiz { language } => Some(language),
            _ => None,
        }
    }

    /// Whether `next` is a legal direct transition from this state.
    /// Lesson and quiz states must stay on the course's language.
    pub fn allows(&self, next: &AppState) -> bool {
        use AppState::*;
        match (self, next) {
            (Onboarding, SignIn) => true,
            (SignIn, SignUp) | (SignUp, SignIn) => true,
            (SignIn, LanguageSelect) | (SignUp, LanguageSelect) => true,
            (LanguageSelect, Proficiency { .. }) => true,
            (LanguageSelect, SignIn) => true,
            (Proficiency { .. }, Dashboard) => true,
            (Proficiency { .. }, LanguageSelect) => true,
            (Dashboard, Course { .. } | ChatSelect | History | LanguageSelect) => true,
            (Course { language: a }, Lesson { language: b } | Quiz { language: b }) => a == b,
            (Course { .. }, Dashboard) => true,
            (Lesson { language: a }, Quiz { language: b } | Course { language: b }) => a == b,
            (Quiz { language: a }, Course { language: b }) => a == b,
            (ChatSelect, Chat { .. } | Dashboard) => true,
            (Chat { .. }, ChatSelect | Dashboard) => true,
            (History, Dashboard) => true,
            _ => false,
        }
    }

    /// Whether this state hosts a free-text field. Raw key events are
    /// routed to these screens so typing never triggers global shortcuts.
    pub fn wants_text_input(&self) -> bool {
        matches!(
            self,
            AppState::SignIn
                | AppState::SignUp
                | AppState::LanguageSelect
                | AppState::Lesson { .. }
                | AppState::Chat { .. }
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::Onboarding
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Non-scored skip (s)
    Skip,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    previous_state: Option<AppState>,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at onboarding
    pub fn new() -> Self {
        Self::with_initial(AppState::Onboarding)
    }

    /// Create a state manager starting at an arbitrary state, e.g. when
    /// onboarding was already completed in a previous run
    pub fn with_initial(initial: AppState) -> Self {
        Self {
            current_state: initial,
            previous_state: None,
            should_quit: false,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> &AppState {
        &self.current_state
    }

    /// Get the previous state if available
    pub fn previous_state(&self) -> Option<&AppState> {
        self.previous_state.as_ref()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state if the transition table allows it.
    /// Returns whether the transition happened.
    pub fn transition_to(&mut self, new_state: AppState) -> bool {
        if new_state == self.current_state {
            return false;
        }
        if !self.current_state.allows(&new_state) {
            tracing::warn!(
                "rejected illegal transition {:?} -> {:?}",
                self.current_state,
                new_state
            );
            return false;
        }
        tracing::debug!("transition {:?} -> {:?}", self.current_state, new_state);
        self.previous_state = Some(self.current_state);
        self.current_state = new_state;
        true
    }

    /// Return to the previous state if one is recorded; otherwise stay put
    pub fn go_back(&mut self) {
        if let Some(prev_state) = self.previous_state.take() {
            self.current_state = prev_state;
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            // Skip (quiz only)
            KeyCode::Char('s') | KeyCode::Char('S') => NavigationAction::Skip,

            // Tab navigation
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }

            _ => NavigationAction::None,
        }
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn swahili() -> &'static Language {
        catalog::find("swahili").unwrap()
    }

    fn zulu() -> &'static Language {
        catalog::find("zulu").unwrap()
    }

    #[test]
    fn test_state_manager_creation() {
        let state_manager = StateManager::new();
        assert_eq!(*state_manager.current_state(), AppState::Onboarding);
        assert!(!state_manager.should_quit());
        assert!(state_manager.previous_state().is_none());
    }

    #[test]
    fn test_legal_transition_chain() {
        let mut sm = StateManager::new();
        assert!(sm.transition_to(AppState::SignIn));
        assert!(sm.transition_to(AppState::LanguageSelect));
        assert!(sm.transition_to(AppState::Proficiency {
            language: swahili()
        }));
        assert!(sm.transition_to(AppState::Dashboard));
        assert_eq!(*sm.current_state(), AppState::Dashboard);
        assert_eq!(
            sm.previous_state(),
            Some(&AppState::Proficiency {
                language: swahili()
            })
        );
    }

    #[test]
    fn test_illegal_transition_is_rejected() {
        let mut sm = StateManager::new();
        // Cannot jump from onboarding straight to the dashboard.
        assert!(!sm.transition_to(AppState::Dashboard));
        assert_eq!(*sm.current_state(), AppState::Onboarding);

        // Cannot enter a lesson from the dashboard without the course.
        let mut sm = StateManager::with_initial(AppState::Dashboard);
        assert!(!sm.transition_to(AppState::Lesson {
            language: swahili()
        }));
    }

    #[test]
    fn test_lesson_must_stay_on_course_language() {
        let mut sm = StateManager::with_initial(AppState::Course {
            language: swahili(),
        });
        assert!(!sm.transition_to(AppState::Lesson { language: zulu() }));
        assert!(sm.transition_to(AppState::Lesson {
            language: swahili()
        }));
    }

    #[test]
    fn test_go_back() {
        let mut sm = StateManager::with_initial(AppState::Dashboard);
        sm.transition_to(AppState::ChatSelect);
        sm.go_back();
        assert_eq!(*sm.current_state(), AppState::Dashboard);

        // No recorded previous state: stay put.
        sm.go_back();
        assert_eq!(*sm.current_state(), AppState::Dashboard);
    }

    #[test]
    fn test_quit_handling() {
        let mut sm = StateManager::new();
        sm.quit();
        assert!(sm.should_quit());
    }

    #[test]
    fn test_data_carrying_states_expose_language() {
        let state = AppState::Course {
            language: swahili(),
        };
        assert_eq!(state.language().unwrap().id, "swahili");
        assert!(AppState::Dashboard.language().is_none());
    }

    #[test]
    fn test_text_input_states() {
        assert!(AppState::SignIn.wants_text_input());
        assert!(AppState::LanguageSelect.wants_text_input());
        assert!(AppState::Lesson {
            language: swahili()
        }
        .wants_text_input());
        assert!(!AppState::Dashboard.wants_text_input());
        assert!(!AppState::Quiz {
            language: swahili()
        }
        .wants_text_input());
    }

    #[test]
    fn test_key_to_navigation() {
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Quit
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Up
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            NavigationAction::Down
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE)),
            NavigationAction::Skip
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
    }
}
