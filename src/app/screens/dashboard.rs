//! Dashboard screen implementation
//!
//! Home screen with the learner's stat cards, today's goal progress, and
//! a quick-action menu. Streak, XP, level, and the goal numbers are
//! literal display data.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Literal dashboard statistics; nothing computes these
#[derive(Debug, Clone)]
struct UserStats {
    name: String,
    streak: u32,
    xp: u32,
    level: u32,
    today_goal_percent: u16,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            name: "Kwame".to_string(),
            streak: 12,
            xp: 2450,
            level: 8,
            today_goal_percent: 75,
        }
    }
}

/// Today's goal rows, literal display data
const TODAY_PROGRESS: &[(&str, u16, u16)] = &[
    ("Vocabulary", 15, 20),
    ("Grammar", 8, 10),
    ("Speaking", 5, 5),
];

/// Menu entries on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    ContinueLearning,
    ChatAssistant,
    SessionHistory,
    SwitchLanguage,
    Quit,
}

impl QuickAction {
    fn all() -> &'static [QuickAction] {
        &[
            QuickAction::ContinueLearning,
            QuickAction::ChatAssistant,
            QuickAction::SessionHistory,
            QuickAction::SwitchLanguage,
            QuickAction::Quit,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            QuickAction::ContinueLearning => "Continue Learning",
            QuickAction::ChatAssistant => "AI Assistant",
            QuickAction::SessionHistory => "Session History",
            QuickAction::SwitchLanguage => "Switch Language",
            QuickAction::Quit => "Quit",
        }
    }
}

/// Dashboard component
#[derive(Debug)]
pub struct DashboardScreen {
    stats: UserStats,
    language_name: Option<String>,
    selected_index: usize,
    list_state: ListState,
}

impl DashboardScreen {
    /// Create a new dashboard
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            stats: UserStats::default(),
            language_name: None,
            selected_index: 0,
            list_state,
        }
    }

    /// Set the greeting name from config
    pub fn set_user_name(&mut self, name: &str) {
        if !name.trim().is_empty() {
            self.stats.name = name.to_string();
        }
    }

    /// Set the active language shown in the header
    pub fn set_language_name(&mut self, name: &str) {
        self.language_name = Some(name.to_string());
    }

    /// The highlighted quick action
    pub fn selected_action(&self) -> QuickAction {
        QuickAction::all()[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        let len = QuickAction::all().len();
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = len - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        let len = QuickAction::all().len();
        if self.selected_index < len - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the dashboard
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Greeting
                Constraint::Length(4), // Stat cards
                Constraint::Length(5), // Today's goal
                Constraint::Min(7),    // Quick actions
                Constraint::Length(3), // Help
            ])
            .split(size);

        self.render_greeting(f, chunks[0]);
        self.render_stats(f, chunks[1]);
        self.render_today_goal(f, chunks[2]);
        self.render_menu(f, chunks[3]);
        self.render_help(f, chunks[4]);
    }

    fn render_greeting(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let language = self
            .language_name
            .as_deref()
            .unwrap_or("your language");
        let greeting = Paragraph::new(Line::from(vec![
            Span::raw("Hello, "),
            Span::styled(
                self.stats.name.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("!  Learning {}", language)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        f.render_widget(greeting, area);
    }

    fn render_stats(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(area);

        let streak = Paragraph::new(format!("{}", self.stats.streak))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Day Streak"));
        f.render_widget(streak, cards[0]);

        let xp = Paragraph::new(format!("{}", self.stats.xp))
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Total XP"));
        f.render_widget(xp, cards[1]);

        let level = Paragraph::new(format!("Lvl {}", self.stats.level))
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Current"));
        f.render_widget(level, cards[2]);
    }

    fn render_today_goal(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Today's Goal: {}%", self.stats.today_goal_percent));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                TODAY_PROGRESS
                    .iter()
                    .map(|_| Constraint::Length(1))
                    .collect::<Vec<_>>(),
            )
            .split(inner);

        for (i, (label, completed, total)) in TODAY_PROGRESS.iter().enumerate() {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(Color::Green))
                .ratio(f64::from(*completed) / f64::from(*total))
                .label(format!("{}: {}/{}", label, completed, total));
            f.render_widget(gauge, rows[i]);
        }
    }

    fn render_menu(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        let items: Vec<ListItem> = QuickAction::all()
            .iter()
            .map(|action| ListItem::new(action.label()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Quick Actions"))
            .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help = Paragraph::new("↑↓: Navigate | Enter: Select | Q: Quit")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, area);
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_navigation_wraps() {
        let mut screen = DashboardScreen::new();
        assert_eq!(screen.selected_action(), QuickAction::ContinueLearning);

        screen.select_previous();
        assert_eq!(screen.selected_action(), QuickAction::Quit);

        screen.select_next();
        assert_eq!(screen.selected_action(), QuickAction::ContinueLearning);

        screen.select_next();
        assert_eq!(screen.selected_action(), QuickAction::ChatAssistant);
    }

    #[test]
    fn test_user_name_from_config() {
        let mut screen = DashboardScreen::new();
        screen.set_user_name("Asha");
        assert_eq!(screen.stats.name, "Asha");

        // Blank names keep the default.
        screen.set_user_name("   ");
        assert_eq!(screen.stats.name, "Asha");
    }
}
