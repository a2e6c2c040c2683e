//! Terminal rendering of confirmation dialogs.

use crate::dialog::{Button, Dialog, FocusTarget};
use crate::document::Document;
use crate::ui::layout::{cascade, centered_rect_lines};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
    Frame,
};

/// Dialog width in percent of the screen
const DIALOG_WIDTH_PERCENT: u16 = 60;
const THEME_COLOR: Color = Color::Red;

/// Styled outer dialog block
fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(THEME_COLOR).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(THEME_COLOR))
}

/// Verification input with a visual cursor when focused
fn input_paragraph<'a>(input: &'a str, focused: bool) -> Paragraph<'a> {
    let display = if focused { format!("{input}█") } else { input.to_string() };
    let border_color = if focused { Color::White } else { Color::Gray };

    Paragraph::new(display)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border_color)),
        )
        .style(Style::default().fg(Color::White))
}

fn button_span(button: &Button, focused: bool) -> Span<'_> {
    let mut style = if button.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!("[ {} ]", button.label), style)
}

/// Number of wrapped lines `text` takes at `width` columns
fn wrapped_lines(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    text.lines()
        .map(|line| line.chars().count().max(1).div_ceil(width))
        .sum::<usize>()
        .max(1)
        .try_into()
        .unwrap_or(u16::MAX)
}

/// A single dialog drawn as a bordered box
pub struct DialogView<'a> {
    dialog: &'a Dialog,
}

impl<'a> DialogView<'a> {
    pub fn new(dialog: &'a Dialog) -> Self {
        Self { dialog }
    }

    fn body_text(&self) -> String {
        self.dialog
            .paragraphs
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Rows needed to draw the dialog at the given outer width
    pub fn height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2);
        let mut height = 2 + wrapped_lines(&self.body_text(), inner_width) + 2;
        if let Some(verification) = &self.dialog.verification {
            if let Some(label) = &verification.label {
                height += wrapped_lines(label, inner_width);
            }
            height += 3;
        }
        height
    }
}

impl Widget for DialogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = self.dialog;
        Clear.render(area, buf);

        let block = dialog_block(&dialog.title);
        let inner = block.inner(area);
        block.render(area, buf);

        let label_height = dialog
            .verification
            .as_ref()
            .and_then(|v| v.label.as_deref())
            .map_or(0, |label| wrapped_lines(label, inner.width));
        let input_height = if dialog.verification.is_some() { 3 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(label_height),
                Constraint::Length(input_height),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(self.body_text())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);

        if let Some(verification) = &dialog.verification {
            if let Some(label) = &verification.label {
                Paragraph::new(label.as_str())
                    .style(Style::default().fg(Color::Gray))
                    .wrap(Wrap { trim: true })
                    .render(chunks[1], buf);
            }
            let focused = dialog.focused == Some(FocusTarget::Verification);
            input_paragraph(verification.gate.input(), focused).render(chunks[2], buf);
        }

        let buttons = Line::from(vec![
            button_span(&dialog.cancel, dialog.focused == Some(FocusTarget::Cancel)),
            Span::raw("  "),
            button_span(&dialog.commit, dialog.focused == Some(FocusTarget::Commit)),
        ]);
        Paragraph::new(buttons).alignment(Alignment::Right).render(chunks[3], buf);
    }
}

/// Draw every visible dialog, lowest stacking value first so the highest ends on top
pub fn render_document(f: &mut Frame, area: Rect, document: &Document) {
    let mut visible: Vec<&Dialog> = document.visible_dialogs().collect();
    visible.sort_by_key(|dialog| dialog.z_index);

    for (depth, dialog) in visible.into_iter().enumerate() {
        let view = DialogView::new(dialog);
        let width = area.width.saturating_mul(DIALOG_WIDTH_PERCENT) / 100;
        let rect = centered_rect_lines(DIALOG_WIDTH_PERCENT, view.height(width).min(area.height), area);
        let depth = u16::try_from(depth).unwrap_or(u16::MAX);
        f.render_widget(view, cascade(rect, depth, area));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_lines() {
        assert_eq!(wrapped_lines("", 10), 1);
        assert_eq!(wrapped_lines("0123456789abc", 10), 2);
        assert_eq!(wrapped_lines("a\n\nb", 10), 3);
    }
}
