//! Integration tests for navigation and screen selection

use lingafriq::app::{
    screens::{DashboardScreen, LanguageScreen, QuickAction},
    AppState, StateManager,
};
use lingafriq::content::catalog;

#[test]
fn test_signin_to_dashboard_flow() {
    let mut state_manager = StateManager::new();

    // Onboarding through proficiency is the only path to the dashboard.
    assert_eq!(*state_manager.current_state(), AppState::Onboarding);
    assert!(state_manager.transition_to(AppState::SignIn));
    assert!(state_manager.transition_to(AppState::LanguageSelect));

    let language = catalog::find("swahili").unwrap();
    assert!(state_manager.transition_to(AppState::Proficiency { language }));
    assert!(state_manager.transition_to(AppState::Dashboard));
    assert_eq!(*state_manager.current_state(), AppState::Dashboard);
}

#[test]
fn test_course_lesson_quiz_loop_keeps_language() {
    let language = catalog::find("zulu").unwrap();
    let other = catalog::find("swahili").unwrap();
    let mut state_manager = StateManager::with_initial(AppState::Dashboard);

    assert!(state_manager.transition_to(AppState::Course { language }));
    // The lesson must stay on the course's language.
    assert!(!state_manager.transition_to(AppState::Lesson { language: other }));
    assert!(state_manager.transition_to(AppState::Lesson { language }));
    assert!(state_manager.transition_to(AppState::Quiz { language }));
    assert!(state_manager.transition_to(AppState::Course { language }));
    assert!(state_manager.transition_to(AppState::Dashboard));
}

#[test]
fn test_dashboard_cannot_jump_into_a_lesson() {
    let language = catalog::find("swahili").unwrap();
    let mut state_manager = StateManager::with_initial(AppState::Dashboard);
    assert!(!state_manager.transition_to(AppState::Lesson { language }));
    assert!(!state_manager.transition_to(AppState::Quiz { language }));
    assert_eq!(*state_manager.current_state(), AppState::Dashboard);
}

#[test]
fn test_language_screen_integration() {
    let mut screen = LanguageScreen::new();

    // Full catalog, then narrow to the Zulu entry.
    assert_eq!(screen.results().len(), catalog::LANGUAGES.len());
    for key in "zulu".chars() {
        screen.handle_key_event(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char(key),
            crossterm::event::KeyModifiers::NONE,
        ));
    }
    assert_eq!(screen.results().len(), 1);
    assert_eq!(screen.selected().unwrap().id, "zulu");
}

#[test]
fn test_dashboard_menu_integration() {
    let mut screen = DashboardScreen::new();

    assert_eq!(screen.selected_action(), QuickAction::ContinueLearning);

    screen.select_next();
    screen.select_next();
    assert_eq!(screen.selected_action(), QuickAction::SessionHistory);

    // Wrap around the whole menu and back.
    for _ in 0..3 {
        screen.select_next();
    }
    assert_eq!(screen.selected_action(), QuickAction::ContinueLearning);
}
