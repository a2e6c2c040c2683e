#![allow(dead_code)]

use confirm_modal::document::Document;
use confirm_modal::options::Backdrop;
use confirm_modal::{ActionFramework, ConfirmModal, DialogId, DialogWidget, Element, ElementId, LifecycleEvent, ShowConfig, WidgetProbe};

/// Widget that behaves like the Bootstrap modal plugin and queues its
/// transition-end events until the test settles them.
pub struct FakeWidget {
    pub probe: WidgetProbe,
    pub shows: Vec<(DialogId, ShowConfig)>,
    pub hides: Vec<DialogId>,
    pending: Vec<LifecycleEvent>,
}

impl FakeWidget {
    pub fn new() -> Self {
        Self::with_probe(WidgetProbe::available("4.6.2"))
    }

    pub fn with_probe(probe: WidgetProbe) -> Self {
        Self {
            probe,
            shows: Vec::new(),
            hides: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn take_events(&mut self) -> Vec<LifecycleEvent> {
        std::mem::take(&mut self.pending)
    }
}

impl DialogWidget for FakeWidget {
    fn probe(&self) -> WidgetProbe {
        self.probe.clone()
    }

    fn show(&mut self, document: &mut Document, dialog: &DialogId, config: &ShowConfig) {
        self.shows.push((dialog.clone(), *config));
        if config.show == Some(false) {
            return;
        }
        if config.backdrop != Some(Backdrop::Disabled) {
            document.insert_backdrop(Some(dialog), true);
        }
        document.set_modal_open(true);
        self.pending.push(LifecycleEvent::Shown(dialog.clone()));
    }

    fn hide(&mut self, document: &mut Document, dialog: &DialogId) {
        self.hides.push(dialog.clone());
        let own = document.backdrops().iter().find(|b| b.after.as_ref() == Some(dialog)).map(|b| b.id);
        if let Some(backdrop) = own {
            document.remove_backdrop(backdrop);
        }
        document.set_modal_open(false);
        self.pending.push(LifecycleEvent::Hidden(dialog.clone()));
    }
}

/// Framework recording every default action it was allowed to run
#[derive(Default)]
pub struct RecordingFramework {
    pub performed: Vec<ElementId>,
}

impl ActionFramework for RecordingFramework {
    fn perform(&mut self, element: &Element) {
        self.performed.push(element.id.clone());
    }
}

pub fn modal() -> ConfirmModal<FakeWidget> {
    ConfirmModal::new(FakeWidget::new()).expect("widget detected")
}

/// Deliver every queued transition-end event
pub fn settle(modal: &mut ConfirmModal<FakeWidget>) {
    loop {
        let events = modal.widget_mut().take_events();
        if events.is_empty() {
            break;
        }
        for event in events {
            modal.dispatch(event);
        }
    }
}

pub fn delete_link(id: &str) -> Element {
    Element::new(id, "a")
        .with_attr("href", "/posts/1")
        .with_data("confirm", "Are you sure?\n\nThis cannot be undone.")
        .with_data("method", "delete")
}
