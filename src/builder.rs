//! Dialog construction from resolved options.
//!
//! Every display field falls back from the options to the current settings.
//! An option only wins when it is set and non-empty.

use crate::constants::METHOD_DELETE;
use crate::dialog::{Button, Dialog, DialogId, DialogOrigin, TrustedHtml, Verification, Visibility};
use crate::document::Document;
use crate::options::{DialogOptions, Focus};
use crate::settings::Settings;
use crate::stacking::ZIndexArbiter;
use crate::verification::{Requirement, VerificationGate};
use crate::widget::ShowConfig;

/// Paragraph separator in confirmation text
const PARAGRAPH_SEPARATOR: &str = "\n\n";

pub struct ModalBuilder<'a> {
    settings: &'a Settings,
}

impl<'a> ModalBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Build a dialog stacked above every dialog currently visible in `document`.
    /// The caller appends it.
    pub fn build(&self, options: &DialogOptions, origin: DialogOrigin, document: &Document) -> Dialog {
        let settings = self.settings;
        let id = DialogId::generate();
        let z_index = ZIndexArbiter::new(settings.z_index).compute(document, &id);

        let verification = Self::requirement(options).map(|requirement| Verification {
            gate: VerificationGate::new(requirement),
            label: non_empty(&options.verify_label).map(str::to_string),
            class: settings.verify_class.clone(),
        });

        let commit = Button {
            label: pick(&options.commit, &settings.commit).to_string(),
            class: pick(&options.commit_class, &settings.commit_class).to_string(),
            disabled: verification.is_some(),
            dismiss: options.remote,
        };
        let cancel = Button {
            label: pick(&options.cancel, &settings.cancel).to_string(),
            class: pick(&options.cancel_class, &settings.cancel_class).to_string(),
            disabled: false,
            dismiss: true,
        };

        let dialog = Dialog {
            title: pick(&options.title, &settings.title).to_string(),
            paragraphs: split_paragraphs(options.text.as_deref().unwrap_or_default()),
            modal_class: non_empty(&options.modal_class)
                .or(settings.modal_class.as_deref())
                .map(str::to_string),
            fade: settings.fade,
            close_content: TrustedHtml::new(pick(&options.modal_close_content, &settings.modal_close_content)),
            commit,
            cancel,
            verification,
            z_index,
            focus: self.resolve_focus(options),
            show_config: ShowConfig {
                backdrop: options.backdrop,
                keyboard: options.keyboard,
                show: Some(options.show.unwrap_or(settings.show)),
            },
            visibility: Visibility::Hidden,
            focused: None,
            origin,
            id,
        };

        log::debug!(
            "Built dialog {} (z-index {}, focus {:?}, verification: {})",
            dialog.id,
            dialog.z_index,
            dialog.focus,
            dialog.verification.is_some()
        );
        dialog
    }

    /// Explicit focus wins, then delete actions focus cancel, then the settings
    pub fn resolve_focus(&self, options: &DialogOptions) -> Focus {
        if let Some(focus) = options.focus {
            return focus;
        }
        let is_delete = options
            .method
            .as_deref()
            .is_some_and(|method| method.eq_ignore_ascii_case(METHOD_DELETE));
        if is_delete {
            Focus::Cancel
        } else {
            self.settings.focus
        }
    }

    /// A pattern takes precedence over a literal
    fn requirement(options: &DialogOptions) -> Option<Requirement> {
        if let Some(pattern) = non_empty(&options.verify_regexp) {
            return Some(Requirement::pattern(pattern, options.verify_regexp_case_insensitive));
        }
        non_empty(&options.verify).map(|literal| {
            if options.strip_alpha {
                Requirement::stripped_literal(literal)
            } else {
                Requirement::literal(literal)
            }
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn pick<'v>(value: &'v Option<String>, fallback: &'v str) -> &'v str {
    non_empty(value).unwrap_or(fallback)
}

/// Split confirmation text on blank lines, keeping each piece verbatim
pub fn split_paragraphs(text: &str) -> Vec<TrustedHtml> {
    text.split(PARAGRAPH_SEPARATOR).map(TrustedHtml::new).collect()
}
