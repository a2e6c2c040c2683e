//! Keyboard handling for the topmost dialog.

use crate::dialog::{Control, Dialog, FocusTarget};
use crate::document::Document;
use crate::modal::Interaction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Interaction a key press maps to on `dialog`, if any.
///
/// Esc closes, Enter clicks the focused button (commit from the input),
/// Tab moves focus, and typing edits the verification input while it has focus.
pub fn interaction_for_key(dialog: &Dialog, key: KeyEvent) -> Option<Interaction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let editing = dialog.focused == Some(FocusTarget::Verification);
    match key.code {
        KeyCode::Esc => Some(Interaction::Click(Control::Close)),
        KeyCode::Enter => match dialog.focused {
            Some(FocusTarget::Cancel) => Some(Interaction::Click(Control::Cancel)),
            _ => Some(Interaction::Click(Control::Commit)),
        },
        KeyCode::Tab => Some(Interaction::FocusNext),
        KeyCode::Char(c) if editing && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut value = dialog.verification_input().unwrap_or_default().to_string();
            value.push(c);
            Some(Interaction::Input(value))
        }
        KeyCode::Backspace if editing => {
            let mut value = dialog.verification_input().unwrap_or_default().to_string();
            value.pop();
            Some(Interaction::Input(value))
        }
        _ => None,
    }
}

/// Visible dialog that receives keyboard input: the one stacked highest
pub fn topmost(document: &Document) -> Option<&Dialog> {
    document.visible_dialogs().max_by_key(|dialog| dialog.z_index)
}
