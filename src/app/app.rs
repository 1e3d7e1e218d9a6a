//! Main application controller
//!
//! Manages the TUI, application state, and screen rendering loop.

use crate::{
    app::{
        screens::{
            AuthEvent, AuthMode, AuthScreen, ChatEvent, ChatModeScreen, ChatScreen, CourseEvent,
            CourseScreen, DashboardScreen, HistoryScreen, LanguageEvent, LanguageScreen,
            LessonEvent, LessonScreen, OnboardingEvent, OnboardingScreen, ProficiencyEvent,
            ProficiencyScreen, QuickAction, QuizEvent, QuizScreen,
        },
        state::{AppState, NavigationAction, StateManager},
        tui::{Tui, MIN_HEIGHT, MIN_WIDTH},
    },
    config::{persistence::HistoryStorage, AppConfig},
    content::catalog::Language,
    models::record::{ActivityKind, SessionRecord},
    session::chat::{ChatMode, ChatResponder},
    util::layout::centered_rect,
    Result,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use tokio::sync::mpsc;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Application state manager
    state_manager: StateManager,
    /// Application config
    config: AppConfig,
    /// Session history storage
    history: HistoryStorage,
    /// Screen components
    onboarding_screen: OnboardingScreen,
    auth_screen: AuthScreen,
    language_screen: LanguageScreen,
    proficiency_screen: ProficiencyScreen,
    dashboard_screen: DashboardScreen,
    course_screen: CourseScreen,
    lesson_screen: LessonScreen,
    quiz_screen: QuizScreen,
    chat_mode_screen: ChatModeScreen,
    chat_screen: ChatScreen,
    history_screen: HistoryScreen,
    /// Mock reply producer
    chat_responder: ChatResponder,
    /// Reply receiver polled by the main loop
    reply_rx: mpsc::Receiver<String>,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let config = AppConfig::load()?;
        let history = HistoryStorage::new()?;
        let (chat_responder, reply_rx) = ChatResponder::new(16);

        let initial = if config.skip_onboarding {
            if config.language().is_some() {
                AppState::Dashboard
            } else {
                AppState::SignIn
            }
        } else {
            AppState::Onboarding
        };
        tracing::info!("starting at {:?}", initial);

        let mut dashboard_screen = DashboardScreen::new();
        dashboard_screen.set_user_name(&config.user_name);
        if let Some(language) = config.language() {
            dashboard_screen.set_language_name(language.name);
        }

        Ok(Self {
            tui: Tui::new()?,
            state_manager: StateManager::with_initial(initial),
            config,
            history,
            onboarding_screen: OnboardingScreen::new(),
            auth_screen: AuthScreen::new(AuthMode::SignIn),
            language_screen: LanguageScreen::new(),
            proficiency_screen: ProficiencyScreen::new(),
            dashboard_screen,
            course_screen: CourseScreen::new(),
            lesson_screen: LessonScreen::new(),
            quiz_screen: QuizScreen::new(),
            chat_mode_screen: ChatModeScreen::new(),
            chat_screen: ChatScreen::new(ChatMode::Translator),
            history_screen: HistoryScreen::default(),
            chat_responder,
            reply_rx,
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            while let Ok(reply) = self.reply_rx.try_recv() {
                self.chat_screen.push_assistant(reply);
            }
            self.draw()?;
            self.handle_events()?;
        }
        tracing::info!("shutting down");
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> io::Result<()> {
        let adequate = self.tui.is_size_adequate()?;
        self.tui.draw(|f| {
            if !adequate {
                let warning = Paragraph::new(format!(
                    "Terminal too small: need at least {}x{}",
                    MIN_WIDTH, MIN_HEIGHT
                ))
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
                f.render_widget(warning, centered_rect(60, 3, f.size()));
                return;
            }

            match self.state_manager.current_state() {
                AppState::Onboarding => self.onboarding_screen.render(f),
                AppState::SignIn | AppState::SignUp => self.auth_screen.render(f),
                AppState::LanguageSelect => self.language_screen.render(f),
                AppState::Proficiency { .. } => self.proficiency_screen.render(f),
                AppState::Dashboard => self.dashboard_screen.render(f),
                AppState::Course { .. } => self.course_screen.render(f),
                AppState::Lesson { .. } => self.lesson_screen.render(f),
                AppState::Quiz { .. } => self.quiz_screen.render(f),
                AppState::ChatSelect => self.chat_mode_screen.render(f),
                AppState::Chat { .. } => self.chat_screen.render(f),
                AppState::History => self.history_screen.render(f),
            }
        })
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        let Some(key) = self.tui.handle_events()? else {
            return Ok(());
        };

        // Ctrl+C quits from anywhere, even screens that eat characters.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state_manager.quit();
            return Ok(());
        }

        let state = *self.state_manager.current_state();
        if state.wants_text_input() {
            self.handle_text_screen_key(state, key);
        } else {
            let action = StateManager::key_to_navigation(key);
            if action == NavigationAction::Quit {
                self.state_manager.quit();
                return Ok(());
            }
            self.handle_nav_screen_action(state, action);
        }
        Ok(())
    }

    /// Route a raw key event to a screen that owns a text field
    fn handle_text_screen_key(&mut self, state: AppState, key: KeyEvent) {
        match state {
            AppState::SignIn | AppState::SignUp => {
                if let Some(event) = self.auth_screen.handle_key_event(key) {
                    self.handle_auth_event(state, event);
                }
            }
            AppState::LanguageSelect => {
                if let Some(event) = self.language_screen.handle_key_event(key) {
                    match event {
                        LanguageEvent::Selected(language) => {
                            tracing::info!("language selected: {}", language.id);
                            self.proficiency_screen.set_language(language);
                            self.state_manager
                                .transition_to(AppState::Proficiency { language });
                        }
                        LanguageEvent::Back => self.state_manager.go_back(),
                    }
                }
            }
            AppState::Lesson { language } => {
                if let Some(event) = self.lesson_screen.handle_key_event(key) {
                    match event {
                        LessonEvent::Completed(outcome) => {
                            self.record_session(
                                language,
                                ActivityKind::Lesson,
                                outcome.score,
                                outcome.max_score,
                            );
                            self.quiz_screen.reset();
                            self.state_manager.transition_to(AppState::Quiz { language });
                        }
                        LessonEvent::Abandoned => {
                            self.state_manager
                                .transition_to(AppState::Course { language });
                        }
                    }
                }
            }
            AppState::Chat { mode } => {
                if let Some(event) = self.chat_screen.handle_key_event(key) {
                    match event {
                        ChatEvent::Send(text) => self.chat_responder.request(mode, &text),
                        ChatEvent::Back => {
                            self.state_manager.transition_to(AppState::ChatSelect);
                        }
                        ChatEvent::ModeChosen(_) => {}
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_auth_event(&mut self, state: AppState, event: AuthEvent) {
        match event {
            AuthEvent::Submitted => {
                // No backend: submit discards the fields and moves on.
                tracing::info!("auth form submitted, entering language selection");
                self.state_manager.transition_to(AppState::LanguageSelect);
            }
            AuthEvent::SwitchMode => {
                let (mode, next) = match state {
                    AppState::SignIn => (AuthMode::SignUp, AppState::SignUp),
                    _ => (AuthMode::SignIn, AppState::SignIn),
                };
                self.auth_screen.set_mode(mode);
                self.state_manager.transition_to(next);
            }
            AuthEvent::Back => match state {
                AppState::SignIn => self.state_manager.quit(),
                _ => {
                    self.auth_screen.set_mode(AuthMode::SignIn);
                    self.state_manager.transition_to(AppState::SignIn);
                }
            },
        }
    }

    /// Route a navigation action to a screen without text entry
    fn handle_nav_screen_action(&mut self, state: AppState, action: NavigationAction) {
        match state {
            AppState::Onboarding => self.handle_onboarding_action(action),
            AppState::Proficiency { language } => {
                self.handle_proficiency_action(language, action)
            }
            AppState::Dashboard => self.handle_dashboard_action(action),
            AppState::Course { language } => self.handle_course_action(language, action),
            AppState::Quiz { language } => self.handle_quiz_action(language, action),
            AppState::ChatSelect => self.handle_chat_select_action(action),
            AppState::History => self.handle_history_action(action),
            _ => {}
        }
    }

    fn handle_onboarding_action(&mut self, action: NavigationAction) {
        let finished = match action {
            NavigationAction::Left | NavigationAction::Back => {
                self.onboarding_screen.previous_slide();
                None
            }
            NavigationAction::Right | NavigationAction::Select => {
                self.onboarding_screen.next_slide()
            }
            NavigationAction::Skip => Some(self.onboarding_screen.skip()),
            _ => None,
        };
        if finished == Some(OnboardingEvent::Finished) {
            self.finish_onboarding();
        }
    }

    fn finish_onboarding(&mut self) {
        self.config.skip_onboarding = true;
        if let Err(e) = self.config.save() {
            tracing::warn!("failed to save config: {}", e);
        }
        self.state_manager.transition_to(AppState::SignIn);
    }

    fn handle_proficiency_action(&mut self, language: &'static Language, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.proficiency_screen.select_previous(),
            NavigationAction::Down => self.proficiency_screen.select_next(),
            NavigationAction::Select => {
                if let ProficiencyEvent::Chosen(level) = self.proficiency_screen.choose() {
                    tracing::info!("proficiency chosen: {} for {}", level.id, language.id);
                    self.config = self
                        .config
                        .clone()
                        .with_language(language.id)
                        .with_proficiency(level.id);
                    if let Err(e) = self.config.save() {
                        tracing::warn!("failed to save config: {}", e);
                    }
                    self.dashboard_screen.set_language_name(language.name);
                    self.state_manager.transition_to(AppState::Dashboard);
                }
            }
            NavigationAction::Back => {
                self.state_manager.transition_to(AppState::LanguageSelect);
            }
            _ => {}
        }
    }

    fn handle_dashboard_action(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.dashboard_screen.select_previous(),
            NavigationAction::Down => self.dashboard_screen.select_next(),
            NavigationAction::Select => match self.dashboard_screen.selected_action() {
                QuickAction::ContinueLearning => {
                    if let Some(language) = self.config.language() {
                        self.course_screen.set_language(language);
                        self.state_manager
                            .transition_to(AppState::Course { language });
                    } else {
                        self.state_manager.transition_to(AppState::LanguageSelect);
                    }
                }
                QuickAction::ChatAssistant => {
                    self.state_manager.transition_to(AppState::ChatSelect);
                }
                QuickAction::SessionHistory => {
                    self.open_history();
                }
                QuickAction::SwitchLanguage => {
                    self.state_manager.transition_to(AppState::LanguageSelect);
                }
                QuickAction::Quit => self.state_manager.quit(),
            },
            NavigationAction::Back => self.state_manager.quit(),
            _ => {}
        }
    }

    fn open_history(&mut self) {
        match self.history.recent_records(crate::MAX_HISTORY_ENTRIES) {
            Ok(records) => self.history_screen.set_records(records),
            Err(e) => {
                tracing::warn!("failed to load history: {}", e);
                self.history_screen.set_records(Vec::new());
            }
        }
        self.state_manager.transition_to(AppState::History);
    }

    fn handle_course_action(&mut self, language: &'static Language, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.course_screen.select_previous(),
            NavigationAction::Down => self.course_screen.select_next(),
            NavigationAction::Select => match self.course_screen.activate() {
                Some(CourseEvent::StartLesson) => {
                    self.lesson_screen.reset();
                    self.state_manager
                        .transition_to(AppState::Lesson { language });
                }
                Some(CourseEvent::StartQuiz) => {
                    self.quiz_screen.reset();
                    self.state_manager.transition_to(AppState::Quiz { language });
                }
                _ => {}
            },
            NavigationAction::Back => {
                self.state_manager.transition_to(AppState::Dashboard);
            }
            _ => {}
        }
    }

    fn handle_quiz_action(&mut self, language: &'static Language, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.quiz_screen.select_previous(),
            NavigationAction::Down => self.quiz_screen.select_next(),
            NavigationAction::Select => {
                if let Some(QuizEvent::Completed(outcome)) = self.quiz_screen.confirm() {
                    self.record_session(
                        language,
                        ActivityKind::Quiz,
                        outcome.score,
                        outcome.max_score,
                    );
                    self.state_manager
                        .transition_to(AppState::Course { language });
                }
            }
            NavigationAction::Skip => self.quiz_screen.skip(),
            NavigationAction::Back => {
                self.state_manager
                    .transition_to(AppState::Course { language });
            }
            _ => {}
        }
    }

    fn handle_chat_select_action(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.chat_mode_screen.select_previous(),
            NavigationAction::Down => self.chat_mode_screen.select_next(),
            NavigationAction::Select => {
                if let ChatEvent::ModeChosen(mode) = self.chat_mode_screen.choose() {
                    self.chat_screen.enter_mode(mode);
                    self.state_manager.transition_to(AppState::Chat { mode });
                }
            }
            NavigationAction::Back => {
                self.state_manager.transition_to(AppState::Dashboard);
            }
            _ => {}
        }
    }

    fn handle_history_action(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.history_screen.select_previous(),
            NavigationAction::Down => self.history_screen.select_next(),
            NavigationAction::Back | NavigationAction::Select => {
                self.state_manager.transition_to(AppState::Dashboard);
            }
            _ => {}
        }
    }

    /// Persist a completed lesson or quiz. Persistence problems are logged
    /// rather than interrupting the UI.
    fn record_session(
        &mut self,
        language: &'static Language,
        activity: ActivityKind,
        score: u32,
        max_score: u32,
    ) {
        let record = SessionRecord::new(language.id, activity, score, max_score);
        tracing::info!("session complete: {}", record.summary());
        if let Err(e) = self.history.append_record(record) {
            tracing::warn!("failed to save session record: {}", e);
        }
    }
}
