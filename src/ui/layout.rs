//! Placement of dialogs on screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Columns and rows each further stacked dialog is shifted by
pub const CASCADE_OFFSET: (u16, u16) = (2, 1);

/// Centered rectangle with percentage width and fixed line height
#[must_use]
pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height_lines),
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

/// Shift `rect` down and right for the `depth`-th stacked dialog, staying inside `bounds`
#[must_use]
pub fn cascade(rect: Rect, depth: u16, bounds: Rect) -> Rect {
    let dx = CASCADE_OFFSET.0.saturating_mul(depth);
    let dy = CASCADE_OFFSET.1.saturating_mul(depth);
    let x = rect.x.saturating_add(dx).min(bounds.right().saturating_sub(rect.width));
    let y = rect.y.saturating_add(dy).min(bounds.bottom().saturating_sub(rect.height));
    Rect::new(x.max(bounds.x), y.max(bounds.y), rect.width, rect.height)
}
