mod common;

use common::{modal, settle, RecordingFramework};
use confirm_modal::dialog::FocusTarget;
use confirm_modal::{Control, DialogOptions, Interaction};
use std::cell::Cell;
use std::rc::Rc;

fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
    (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
}

fn counted(text: &str, confirmed: &Rc<Cell<u32>>, cancelled: &Rc<Cell<u32>>) -> DialogOptions {
    let confirmed = Rc::clone(confirmed);
    let cancelled = Rc::clone(cancelled);
    DialogOptions::with_text(text)
        .on_confirm(move || confirmed.set(confirmed.get() + 1))
        .on_cancel(move || cancelled.set(cancelled.get() + 1))
}

#[test]
fn test_commit_runs_on_confirm() {
    let mut modal = modal();
    let mut framework = RecordingFramework::default();
    let (confirmed, cancelled) = counter();

    let id = modal.confirm(counted("Publish now?", &confirmed, &cancelled));
    settle(&mut modal);
    assert!(modal.dialog(&id).unwrap().is_ephemeral());

    modal.click(&id, Control::Commit, &mut framework);
    assert_eq!(confirmed.get(), 1);
    assert_eq!(cancelled.get(), 0);
    assert!(framework.performed.is_empty());

    // Still in the document until the hidden transition ends
    assert!(modal.document().contains(&id));
    settle(&mut modal);
    assert!(!modal.document().contains(&id));
}

#[test]
fn test_cancel_runs_on_cancel() {
    let mut modal = modal();
    let mut framework = RecordingFramework::default();
    let (confirmed, cancelled) = counter();

    let id = modal.confirm(counted("Discard draft?", &confirmed, &cancelled));
    settle(&mut modal);
    modal.click(&id, Control::Cancel, &mut framework);
    settle(&mut modal);

    assert_eq!(confirmed.get(), 0);
    assert_eq!(cancelled.get(), 1);
    assert!(!modal.document().contains(&id));
}

#[test]
fn test_close_runs_no_callback() {
    let mut modal = modal();
    let mut framework = RecordingFramework::default();
    let (confirmed, cancelled) = counter();

    let id = modal.confirm(counted("Leave page?", &confirmed, &cancelled));
    settle(&mut modal);
    modal.click(&id, Control::Close, &mut framework);
    settle(&mut modal);

    assert_eq!(confirmed.get() + cancelled.get(), 0);
    assert!(!modal.document().contains(&id));
}

#[test]
fn test_callbacks_optional() {
    let mut modal = modal();
    let mut framework = RecordingFramework::default();

    let id = modal.confirm(DialogOptions::with_text("No hooks"));
    settle(&mut modal);
    modal.click(&id, Control::Commit, &mut framework);
    settle(&mut modal);
    assert!(modal.document().dialogs().is_empty());
}

#[test]
fn test_ephemeral_never_touches_native_override() {
    let mut modal = modal();
    let mut framework = RecordingFramework::default();

    let id = modal.confirm(DialogOptions::with_text("Really?"));
    settle(&mut modal);
    modal.click(&id, Control::Commit, &mut framework);
    assert!(!modal.native_override().is_active());
    assert!(modal.cache().is_empty());
}

#[test]
fn test_verification_gates_commit() {
    let mut modal = modal();
    let mut framework = RecordingFramework::default();
    let (confirmed, cancelled) = counter();

    let mut options = counted("Type the project name to delete it.", &confirmed, &cancelled);
    options.verify = Some("acme".to_string());
    options.verify_label = Some("Project name".to_string());
    let id = modal.confirm(options);
    settle(&mut modal);

    let dialog = modal.dialog(&id).unwrap();
    assert!(dialog.commit.disabled);
    assert_eq!(dialog.focused, Some(FocusTarget::Verification));

    // Disabled commit is ignored
    modal.click(&id, Control::Commit, &mut framework);
    assert_eq!(confirmed.get(), 0);

    modal.interact(&id, Interaction::Input("acm".to_string()), &mut framework);
    assert!(modal.dialog(&id).unwrap().commit.disabled);
    modal.interact(&id, Interaction::Input("acme".to_string()), &mut framework);
    assert!(!modal.dialog(&id).unwrap().commit.disabled);

    modal.interact(&id, Interaction::Click(Control::Commit), &mut framework);
    assert_eq!(confirmed.get(), 1);
}

#[test]
fn test_focus_next_cycles_controls() {
    let mut modal = modal();
    let mut framework = RecordingFramework::default();

    let id = modal.confirm(DialogOptions::with_text("Cycle"));
    settle(&mut modal);
    assert_eq!(modal.dialog(&id).unwrap().focused, Some(FocusTarget::Commit));

    modal.interact(&id, Interaction::FocusNext, &mut framework);
    assert_eq!(modal.dialog(&id).unwrap().focused, Some(FocusTarget::Cancel));
    modal.interact(&id, Interaction::FocusNext, &mut framework);
    assert_eq!(modal.dialog(&id).unwrap().focused, Some(FocusTarget::Commit));
}

#[test]
fn test_stacked_ephemerals_get_increasing_z_index() {
    let mut modal = modal();
    let first = modal.confirm(DialogOptions::with_text("First"));
    let second = modal.confirm(DialogOptions::with_text("Second"));

    let z_first = modal.dialog(&first).unwrap().z_index;
    let z_second = modal.dialog(&second).unwrap().z_index;
    assert_eq!(z_first, 1051);
    assert!(z_second > z_first);
}
