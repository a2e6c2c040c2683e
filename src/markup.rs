//! Bootstrap-compatible HTML for a dialog.
//!
//! Title, labels and classes are escaped. Body paragraphs and the close icon
//! are [`TrustedHtml`](crate::dialog::TrustedHtml) and go out verbatim.

use crate::constants::{CLASS_BACKDROP, CLASS_CANCEL, CLASS_COMMIT, CLASS_FADE, CLASS_SHOW};
use crate::dialog::{Button, Dialog};
use crate::document::BackdropElement;
use std::fmt::Write;

/// Escape text for element content and double-quoted attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn button(out: &mut String, role: &str, button: &Button, extra: &str) {
    let _ = write!(
        out,
        r#"<button class="btn {role}{extra} {class}""#,
        class = escape(&button.class)
    );
    if role == CLASS_COMMIT {
        out.push_str(r#" type="submit""#);
    }
    if button.dismiss {
        out.push_str(r#" data-dismiss="modal""#);
    }
    if button.disabled {
        out.push_str(" disabled");
    }
    let _ = write!(out, ">{}</button>", escape(&button.label));
}

pub fn render_html(dialog: &Dialog) -> String {
    let id = dialog.id.as_str();
    let classes = dialog.classes().iter().map(|c| escape(c)).collect::<Vec<_>>().join(" ");
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<div id="{id}" class="{classes}" style="z-index: {z};" tabindex="-1" role="dialog" aria-labelledby="{id}Label" aria-hidden="{hidden}">"#,
        z = dialog.z_index,
        hidden = !dialog.is_visible(),
    );
    out.push_str(r#"<div class="modal-dialog" role="document"><div class="modal-content">"#);

    let _ = write!(
        out,
        r#"<div class="modal-header"><h5 id="{id}Label" class="modal-title">{title}</h5> "#,
        title = escape(&dialog.title)
    );
    let _ = write!(
        out,
        r#"<button type="button" class="close" data-dismiss="modal" aria-hidden="true">{}</button></div>"#,
        dialog.close_content.as_str()
    );

    out.push_str(r#"<div class="modal-body">"#);
    for paragraph in &dialog.paragraphs {
        let _ = write!(out, "<p>{}</p>", paragraph.as_str());
    }
    if let Some(verification) = &dialog.verification {
        if let Some(label) = &verification.label {
            let _ = write!(out, "<p>{}</p>", escape(label));
        }
        let _ = write!(
            out,
            r#"<input type="text" class="{}" value="{}">"#,
            escape(&verification.class),
            escape(verification.gate.input())
        );
    }
    out.push_str("</div>");

    out.push_str(r#"<div class="modal-footer">"#);
    button(&mut out, CLASS_CANCEL, &dialog.cancel, " ms-auto");
    button(&mut out, CLASS_COMMIT, &dialog.commit, "");
    out.push_str("</div></div></div></div>");
    out
}

pub fn render_backdrop(backdrop: &BackdropElement) -> String {
    if backdrop.fade {
        format!(r#"<div class="{CLASS_BACKDROP} {CLASS_FADE} {CLASS_SHOW}"></div>"#)
    } else {
        format!(r#"<div class="{CLASS_BACKDROP} {CLASS_SHOW}"></div>"#)
    }
}
