mod common;

use common::{delete_link, modal, settle};
use confirm_modal::markup::{escape, render_backdrop, render_html};
use confirm_modal::DialogOptions;

#[test]
fn test_escape() {
    assert_eq!(escape(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
}

#[test]
fn test_render_element_dialog() {
    let mut modal = modal();
    let link = delete_link("delete-post").with_data("title", "<Delete>");
    let id = modal.get_confirm_modal(&link);
    let html = render_html(modal.dialog(&id).unwrap());

    assert!(html.starts_with(&format!(r#"<div id="{}" class="modal fade""#, id)));
    assert!(html.contains(r#"aria-hidden="true""#));
    assert!(html.contains("z-index: 1051;"));
    assert!(html.contains("&lt;Delete&gt;"));
    assert!(html.contains("<p>Are you sure?</p><p>This cannot be undone.</p>"));
    assert!(html.contains(r#"<button type="button" class="close" data-dismiss="modal" aria-hidden="true"><svg"#));
    assert!(html.contains(r#"<button class="btn cancel ms-auto btn-default" data-dismiss="modal">Cancel</button>"#));
    assert!(html.contains(r#"<button class="btn commit btn-danger" type="submit">Confirm</button>"#));
    assert!(!html.contains("<input"));
}

#[test]
fn test_render_visible_dialog_with_verification() {
    let mut modal = modal();
    let mut options = DialogOptions::with_text("Type <b>DELETE</b>");
    options.verify = Some("DELETE".to_string());
    options.verify_label = Some("Type & confirm".to_string());
    options.modal_class = Some("modal-lg".to_string());
    let id = modal.confirm(options);
    settle(&mut modal);

    let html = render_html(modal.dialog(&id).unwrap());
    assert!(html.contains(r#"class="modal modal-lg fade show""#));
    assert!(html.contains(r#"aria-hidden="false""#));
    // Body text is trusted markup
    assert!(html.contains("<p>Type <b>DELETE</b></p>"));
    assert!(html.contains("<p>Type &amp; confirm</p>"));
    assert!(html.contains(r#"<input type="text" class="form-control" value="">"#));
    assert!(html.contains(r#"type="submit" disabled>Confirm</button>"#));
}

#[test]
fn test_render_backdrop() {
    let mut modal = modal();
    modal.confirm(DialogOptions::with_text("Backdrop"));
    let backdrop = &modal.document().backdrops()[0];
    assert_eq!(render_backdrop(backdrop), r#"<div class="modal-backdrop fade show"></div>"#);
}
