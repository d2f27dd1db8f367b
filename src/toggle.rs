//! Open/close toggle shared by the dropdowns and the mobile menu.
//!
//! A widget is a trigger plus a panel. The open flag lives here; the panel's
//! `open` class and the trigger's `aria-expanded` are written from it after
//! every transition. Closing is forced (never a toggle) and writes nothing
//! when the panel is already closed.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::consts::{ARIA_EXPANDED, OPEN_CLASS};
use crate::input::{Key, Response};
use crate::surface::{Surface, aria_bool};

type Observer = Box<dyn FnMut(bool)>;

/// One dropdown-style widget.
pub struct ToggleWidget<S> {
    trigger: S,
    panel: S,
    open: bool,
    on_change: Option<Observer>,
}

impl<S: Surface> ToggleWidget<S> {
    /// A closed widget. Nothing is written to the page until the first transition.
    pub fn new(trigger: S, panel: S) -> Self {
        Self { trigger, panel, open: false, on_change: None }
    }

    /// Call `observer` with the new state after every real transition.
    #[must_use]
    pub fn with_observer(mut self, observer: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(observer));
        self
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    // --- Event handlers ---

    /// Flip the panel. The click must not reach the document-level close.
    pub fn on_trigger_click(&mut self) -> Response {
        self.set_open(!self.open);
        Response::STOP
    }

    /// Clicks inside the panel never count as outside clicks.
    pub fn on_panel_click(&mut self) -> Response {
        Response::STOP
    }

    /// Any click that reached the document is outside the widget.
    pub fn on_document_click(&mut self) -> Response {
        self.close();
        Response::PASS
    }

    pub fn on_key_down(&mut self, key: &Key) -> Response {
        if key.is_escape() {
            self.close();
        }
        Response::PASS
    }

    // --- Transitions ---

    /// Force the panel closed. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.set_open(false);
        true
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        if open {
            self.panel.add_class(OPEN_CLASS);
        } else {
            self.panel.remove_class(OPEN_CLASS);
        }
        self.trigger.set_attribute(ARIA_EXPANDED, aria_bool(open));
        if let Some(observer) = self.on_change.as_mut() {
            observer(open);
        }
    }
}
