use crate::common::{modal, settle, RecordingFramework};
use confirm_modal::dialog::FocusTarget;
use confirm_modal::ui::{interaction_for_key, topmost};
use confirm_modal::{Control, DialogOptions, Interaction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_button_keys() {
    let mut modal = modal();
    let id = modal.confirm(DialogOptions::with_text("Keys"));
    settle(&mut modal);
    let dialog = modal.dialog(&id).unwrap();

    assert_eq!(interaction_for_key(dialog, press(KeyCode::Esc)), Some(Interaction::Click(Control::Close)));
    assert_eq!(interaction_for_key(dialog, press(KeyCode::Enter)), Some(Interaction::Click(Control::Commit)));
    assert_eq!(interaction_for_key(dialog, press(KeyCode::Tab)), Some(Interaction::FocusNext));
    // Typing does nothing without a focused input
    assert_eq!(interaction_for_key(dialog, press(KeyCode::Char('x'))), None);

    let mut release = press(KeyCode::Enter);
    release.kind = KeyEventKind::Release;
    assert_eq!(interaction_for_key(dialog, release), None);
}

#[test]
fn test_enter_on_cancel() {
    let mut modal = modal();
    let mut framework = RecordingFramework::default();
    let id = modal.confirm(DialogOptions::with_text("Keys"));
    settle(&mut modal);
    modal.interact(&id, Interaction::FocusNext, &mut framework);

    let dialog = modal.dialog(&id).unwrap();
    assert_eq!(dialog.focused, Some(FocusTarget::Cancel));
    assert_eq!(interaction_for_key(dialog, press(KeyCode::Enter)), Some(Interaction::Click(Control::Cancel)));
}

#[test]
fn test_typing_into_verification() {
    let mut modal = modal();
    let mut framework = RecordingFramework::default();
    let mut options = DialogOptions::with_text("Type ok");
    options.verify = Some("ok".to_string());
    let id = modal.confirm(options);
    settle(&mut modal);

    for code in [KeyCode::Char('o'), KeyCode::Char('x'), KeyCode::Backspace, KeyCode::Char('k')] {
        let interaction = interaction_for_key(modal.dialog(&id).unwrap(), press(code)).unwrap();
        modal.interact(&id, interaction, &mut framework);
    }

    let dialog = modal.dialog(&id).unwrap();
    assert_eq!(dialog.verification_input(), Some("ok"));
    assert!(!dialog.commit.disabled);
}

#[test]
fn test_topmost_is_highest_z_index() {
    let mut modal = modal();
    assert!(topmost(modal.document()).is_none());

    modal.confirm(DialogOptions::with_text("Lower"));
    let upper = modal.confirm(DialogOptions::with_text("Upper"));
    assert_eq!(topmost(modal.document()).map(|d| &d.id), Some(&upper));
}
