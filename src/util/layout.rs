//! Layout helpers
//!
//! Small geometry utilities shared by several screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// A rect of the given height, centered vertically and spanning
/// `percent_x` percent of the width, centered horizontally.
pub fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// The standard three-row screen layout: header, body, help bar.
pub fn screen_chunks(area: Rect, header_height: u16) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area)
}
