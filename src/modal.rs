//! Admin login dialog.
//!
//! Opening shows the dialog (`active` class, `aria-hidden="false"`) and moves
//! focus to the phone input when the page has one. Closing hides it and
//! hands focus back to the control that opened it. Escape only acts while
//! the dialog is open.
//!
//! The submit button is a placeholder: it closes the dialog and logs. No
//! credentials leave the page.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::consts::{ACTIVE_CLASS, ARIA_HIDDEN};
use crate::input::{Key, Response};
use crate::surface::{Surface, aria_bool};

/// State machine for the admin dialog.
pub struct ModalController<S> {
    dialog: S,
    opener: S,
    focus_target: Option<S>,
    open: bool,
}

impl<S: Surface> ModalController<S> {
    /// A closed dialog. `focus_target` receives focus on open when present.
    pub fn new(dialog: S, opener: S, focus_target: Option<S>) -> Self {
        Self { dialog, opener, focus_target, open: false }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    // --- Event handlers ---

    /// The opener is a link; keep the browser from following it.
    pub fn on_open_click(&mut self) -> Response {
        self.open();
        Response::PREVENT
    }

    pub fn on_close_click(&mut self) -> Response {
        self.close();
        Response::PASS
    }

    pub fn on_cancel_click(&mut self) -> Response {
        self.close();
        Response::PASS
    }

    /// Placeholder submit: close only.
    pub fn on_submit_click(&mut self) -> Response {
        if self.close() {
            log::info!("admin login submitted; sign-in is not wired on this page");
        }
        Response::PASS
    }

    /// Click anywhere within the dialog element. Only a click whose target is
    /// the dialog itself (the backdrop) closes it.
    pub fn on_dialog_click(&mut self, on_backdrop: bool) -> Response {
        if on_backdrop {
            self.close();
        }
        Response::PASS
    }

    pub fn on_key_down(&mut self, key: &Key) -> Response {
        if key.is_escape() && self.open {
            self.close();
        }
        Response::PASS
    }

    // --- Transitions ---

    /// Show the dialog and focus its input. Opening an open dialog writes nothing.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.dialog.add_class(ACTIVE_CLASS);
        self.dialog.set_attribute(ARIA_HIDDEN, aria_bool(false));
        if let Some(target) = &self.focus_target {
            target.focus();
        }
        log::debug!("admin modal opened");
    }

    /// Hide the dialog and return focus to the opener. Returns `true` if it
    /// was open.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.dialog.remove_class(ACTIVE_CLASS);
        self.dialog.set_attribute(ARIA_HIDDEN, aria_bool(true));
        self.opener.focus();
        log::debug!("admin modal closed");
        true
    }
}
