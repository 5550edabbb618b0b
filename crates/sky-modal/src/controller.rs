//! Modal controller
//!
//! Delegated click/keydown handling as an explicit two-state machine: a
//! dialog is either absent or present, and every mutation the open and
//! close sequences perform hangs off that transition. The open sequence
//! produces an `ActiveModal` handle; the close sequence consumes it, so
//! nothing is resolved through fixed element ids at close time.

use sky_a11y::{ATTR_HIDDEN, focusable_within};
use sky_dom::{Document, DomResult, NodeId};

use crate::builder;
use crate::config::{
    BackgroundClick, NO_SCROLL_CLASS, PAGE_WRAPPER_ID, TRIGGER_CLASS, TRIGGER_ID_PREFIX,
    TriggerConfig,
};
use crate::event::{InputEvent, InputEventKind, Key};

/// Handle to the currently open dialog
#[derive(Debug, Clone)]
pub struct ActiveModal {
    dialog: NodeId,
    overlay: NodeId,
    close_button: NodeId,
    /// Trigger that opened the dialog; focus returns here on close
    trigger: NodeId,
    /// Borrowed content: source element and the holder inside the dialog
    borrowed: Option<(NodeId, NodeId)>,
    background_click: BackgroundClick,
}

impl ActiveModal {
    pub fn dialog(&self) -> NodeId {
        self.dialog
    }

    pub fn overlay(&self) -> NodeId {
        self.overlay
    }

    pub fn close_button(&self) -> NodeId {
        self.close_button
    }

    pub fn trigger(&self) -> NodeId {
        self.trigger
    }
}

#[derive(Debug, Default)]
enum ModalState {
    #[default]
    Closed,
    Open(ActiveModal),
}

/// The modal controller, attached once per document
#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the document for triggers and set up the page wrapper
    ///
    /// Triggers get the ids `label_modal_1..n` in document order. Install
    /// is idempotent: the wrapper is only created once, and triggers added
    /// after install are not picked up.
    pub fn install(&mut self, doc: &mut Document) {
        let triggers = doc.elements_by_class(TRIGGER_CLASS);
        for (index, &trigger) in triggers.iter().enumerate() {
            let label = format!("{TRIGGER_ID_PREFIX}{}", index + 1);
            let _ = doc.tree_mut().set_attr(trigger, "id", &label);
        }

        if doc.get_element_by_id(PAGE_WRAPPER_ID).is_none() {
            let body = doc.body();
            let wrapper = doc.tree_mut().create_element("div");
            let _ = doc.tree_mut().set_attr(wrapper, "id", PAGE_WRAPPER_ID);
            let _ = doc.tree_mut().wrap_children(body, wrapper);
        }

        tracing::debug!(triggers = triggers.len(), "modal controller installed");
    }

    /// Whether a dialog is currently open
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Handle of the currently open dialog
    pub fn active(&self) -> Option<&ActiveModal> {
        match &self.state {
            ModalState::Open(active) => Some(active),
            ModalState::Closed => None,
        }
    }

    /// Dispatch one input event against the document
    pub fn handle_event(&mut self, doc: &mut Document, event: &mut InputEvent) {
        match event.kind() {
            InputEventKind::Click { target } => self.handle_click(doc, target, event),
            InputEventKind::Keydown { key, shift } => self.handle_keydown(doc, key, shift, event),
        }
    }

    fn handle_click(&mut self, doc: &mut Document, target: NodeId, event: &mut InputEvent) {
        if doc.tree().has_class(target, TRIGGER_CLASS) {
            match self.state {
                ModalState::Closed => {
                    self.open(doc, target);
                    event.prevent_default();
                }
                ModalState::Open(_) => {
                    // Single-dialog invariant: absorb the activation
                    tracing::warn!("trigger activated while a dialog is open; ignored");
                    event.prevent_default();
                }
            }
            return;
        }

        let ModalState::Open(active) = &self.state else {
            return;
        };

        let on_close_button = target == active.close_button
            || doc.tree().is_ancestor(active.close_button, target);
        let on_overlay = target == active.overlay;

        if on_overlay && active.background_click == BackgroundClick::Disabled {
            // Background clicks are absorbed, nothing happens
            return;
        }
        if on_close_button || on_overlay {
            self.close(doc);
        }
    }

    fn handle_keydown(&mut self, doc: &mut Document, key: Key, shift: bool, event: &mut InputEvent) {
        if !self.is_open() {
            return;
        }
        match key {
            Key::Escape => self.close(doc),
            Key::Tab => self.trap_focus(doc, shift, event),
            Key::Other => {}
        }
    }

    /// Open sequence: build overlay and dialog, hide the page, move focus
    fn open(&mut self, doc: &mut Document, trigger: NodeId) {
        let config = TriggerConfig::from_trigger(doc.tree(), trigger);
        match open_inner(doc, trigger, &config) {
            Ok(active) => {
                tracing::debug!(trigger = %config.focus_back_id, "modal opened");
                self.state = ModalState::Open(active);
            }
            Err(err) => tracing::warn!(%err, "failed to open modal"),
        }
    }

    /// Close sequence: tear down, restore borrowed content, return focus
    fn close(&mut self, doc: &mut Document) {
        let ModalState::Open(active) = std::mem::take(&mut self.state) else {
            return;
        };

        // Borrowed children go home before the dialog subtree is unlinked;
        // a source that has left the document forfeits them
        if let Some((source, holder)) = active.borrowed {
            if doc.tree().is_attached(source) {
                let _ = doc.tree_mut().move_children(holder, source);
            }
        }

        let _ = doc.tree_mut().remove(active.dialog);
        let _ = doc.tree_mut().remove(active.overlay);

        if let Some(wrapper) = doc.get_element_by_id(PAGE_WRAPPER_ID) {
            let _ = doc.tree_mut().remove_attr(wrapper, ATTR_HIDDEN);
        }
        let body = doc.body();
        let _ = doc.tree_mut().remove_class(body, NO_SCROLL_CLASS);

        doc.focus(active.trigger);
        tracing::debug!("modal closed");
    }

    /// Keep Tab cycling within the dialog's focusable elements
    fn trap_focus(&mut self, doc: &mut Document, shift: bool, event: &mut InputEvent) {
        let ModalState::Open(active) = &self.state else {
            return;
        };

        let focusables = focusable_within(doc.tree(), active.dialog);
        let Some((&first, &last)) = focusables.first().zip(focusables.last()) else {
            // Nothing to cycle through; keep focus where it is
            event.prevent_default();
            return;
        };

        let position = doc
            .active_element()
            .and_then(|current| focusables.iter().position(|&f| f == current));

        match position {
            // Focus escaped the trap: pull it back to the first element
            None => {
                event.prevent_default();
                doc.focus(first);
            }
            Some(0) if shift => {
                event.prevent_default();
                doc.focus(last);
            }
            Some(i) if !shift && i == focusables.len() - 1 => {
                event.prevent_default();
                doc.focus(first);
            }
            // Mid-list moves are left to the default tab order
            Some(_) => {}
        }
    }
}

fn open_inner(
    doc: &mut Document,
    trigger: NodeId,
    config: &TriggerConfig,
) -> DomResult<ActiveModal> {
    let overlay = builder::build_overlay(doc.tree_mut(), config)?;
    let parts = builder::build_dialog(doc, config)?;

    let body = doc.body();
    doc.tree_mut().append_child(body, overlay)?;
    doc.tree_mut().append_child(body, parts.dialog)?;

    if let Some(wrapper) = doc.get_element_by_id(PAGE_WRAPPER_ID) {
        doc.tree_mut().set_attr(wrapper, ATTR_HIDDEN, "true")?;
    }
    doc.tree_mut().add_class(body, NO_SCROLL_CLASS)?;

    doc.focus(parts.close_button);

    Ok(ActiveModal {
        dialog: parts.dialog,
        overlay,
        close_button: parts.close_button,
        trigger,
        borrowed: parts.borrowed,
        background_click: config.background_click,
    })
}
