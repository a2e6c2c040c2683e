use crate::common::{delete_link, modal, settle};
use confirm_modal::ui::{render_document, DialogView};
use confirm_modal::DialogOptions;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(document: &confirm_modal::document::Document) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| render_document(f, f.area(), document)).unwrap();
    screen_text(terminal.backend().buffer())
}

#[test]
fn test_nothing_drawn_without_visible_dialogs() {
    let mut modal = modal();
    modal.get_confirm_modal(&delete_link("hidden"));
    assert!(draw(modal.document()).trim().is_empty());
}

#[test]
fn test_visible_dialog_drawn() {
    let mut modal = modal();
    let link = delete_link("delete-post").with_data("title", "Delete post");
    modal.confirm_modal(&link);
    settle(&mut modal);

    let screen = draw(modal.document());
    assert!(screen.contains("Delete post"));
    assert!(screen.contains("Are you sure?"));
    assert!(screen.contains("This cannot be undone."));
    assert!(screen.contains("[ Cancel ]"));
    assert!(screen.contains("[ Confirm ]"));
}

#[test]
fn test_stacked_dialogs_all_drawn() {
    let mut modal = modal();
    modal.confirm(DialogOptions::with_text("Lower dialog"));
    modal.confirm(DialogOptions::with_text("Upper dialog"));
    settle(&mut modal);

    let screen = draw(modal.document());
    assert!(screen.contains("Upper dialog"));
}

#[test]
fn test_height_grows_with_verification() {
    let mut modal = modal();
    let plain = modal.confirm(DialogOptions::with_text("Plain"));

    let mut options = DialogOptions::with_text("Plain");
    options.verify = Some("yes".to_string());
    options.verify_label = Some("Type yes".to_string());
    let verified = modal.confirm(options);

    let plain_height = DialogView::new(modal.dialog(&plain).unwrap()).height(40);
    let verified_height = DialogView::new(modal.dialog(&verified).unwrap()).height(40);
    assert_eq!(verified_height, plain_height + 4);
}
