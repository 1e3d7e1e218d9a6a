//! Onboarding screen implementation
//!
//! Welcome carousel with four slides, dot indicators, and a skip action.
//! Finishing (or skipping) hands control to the sign-in screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// One carousel slide
struct Slide {
    title: &'static str,
    description: &'static str,
    accent: Color,
}

const SLIDES: &[Slide] = &[
    Slide {
        title: "Welcome to AfriLingo",
        description: "Your reliable companion in the journey through African languages. \
                      Immerse yourself in the world of languages with our AI-powered \
                      learning platform.",
        accent: Color::Red,
    },
    Slide {
        title: "Learn with AI Tutors",
        description: "Practice with our intelligent AI tutors and translators. Get instant \
                      feedback and personalized learning paths tailored to your goals.",
        accent: Color::Green,
    },
    Slide {
        title: "Join the Community",
        description: "Connect with learners worldwide. Share your progress, compete in \
                      challenges, and immerse yourself in Pan-African culture.",
        accent: Color::Yellow,
    },
    Slide {
        title: "Track Your Progress",
        description: "Earn badges, maintain streaks, and climb global rankings. Celebrate \
                      every milestone in your language learning journey.",
        accent: Color::Magenta,
    },
];

/// Event emitted when the carousel is done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingEvent {
    Finished,
}

/// Onboarding carousel component
#[derive(Debug)]
pub struct OnboardingScreen {
    slide_index: usize,
}

impl OnboardingScreen {
    /// Create a new onboarding screen at the first slide
    pub fn new() -> Self {
        Self { slide_index: 0 }
    }

    /// Advance to the next slide; finishing past the last one emits
    /// [`OnboardingEvent::Finished`]
    pub fn next_slide(&mut self) -> Option<OnboardingEvent> {
        if self.slide_index < SLIDES.len() - 1 {
            self.slide_index += 1;
            None
        } else {
            Some(OnboardingEvent::Finished)
        }
    }

    /// Go back one slide, stopping at the first
    pub fn previous_slide(&mut self) {
        self.slide_index = self.slide_index.saturating_sub(1);
    }

    /// Skip the rest of the carousel
    pub fn skip(&self) -> OnboardingEvent {
        OnboardingEvent::Finished
    }

    /// 0-based index of the visible slide
    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    /// Render the onboarding screen
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // Dot indicators
                Constraint::Length(1),
                Constraint::Length(5), // Title
                Constraint::Min(6),    // Description
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let slide = &SLIDES[self.slide_index];

        self.render_dots(f, chunks[0]);
        self.render_title(f, chunks[2], slide);
        self.render_description(f, chunks[3], slide);
        self.render_help(f, chunks[4]);
    }

    fn render_dots(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let mut spans = Vec::new();
        for (i, _) in SLIDES.iter().enumerate() {
            let style = if i == self.slide_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(if i == self.slide_index { "●" } else { "○" }, style));
            spans.push(Span::raw(" "));
        }
        let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        f.render_widget(dots, area);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect, slide: &Slide) {
        let title = Paragraph::new(slide.title)
            .style(
                Style::default()
                    .fg(slide.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(slide.accent)),
            );
        f.render_widget(title, area);
    }

    fn render_description(&self, f: &mut Frame, area: ratatui::layout::Rect, slide: &Slide) {
        let description = Paragraph::new(slide.description)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(description, area);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "←→",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Slides  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Next  "),
            Span::styled(
                "S",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Skip  "),
            Span::styled(
                "Q",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, area);
    }
}

impl Default for OnboardingScreen {
    fn default() -> Self {
        Self::new()
    }
}
