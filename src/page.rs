//! Page composition.
//!
//! [`Page`] binds the live clock, the two header dropdowns, the mobile menu
//! and the admin modal to the server-rendered markup. Each widget resolves
//! its own elements; a widget whose elements are missing is skipped and the
//! rest still bind.
//!
//! DESIGN
//! ======
//! Everything the page needs from the document goes through [`Host`]: element
//! lookup, listeners, the unload hook, timers and page-wide markers. The
//! browser host lives in `dom`; tests drive the same composition with an
//! in-memory host.
//!
//! Init-once holds per document, not per `Page`: the clock and the widgets
//! each claim a marker on the host before binding, so a second composer
//! (the auto-start plus a manual `PageWiring`, say) binds nothing.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::cell::RefCell;
use std::rc::Rc;

use time::OffsetDateTime;

use crate::clock::{ClockGuard, ClockHandle, Ticker, start_clock};
use crate::config::{ElementIds, UiConfig};
use crate::consts::{CLOCK_BOUND_MARKER, WIDGETS_BOUND_MARKER};
use crate::error::SetupError;
use crate::hijri::LunarCalendar;
use crate::input::{PageEvent, Response};
use crate::live_time::LiveTimeFormatter;
use crate::modal::ModalController;
use crate::surface::Surface;
use crate::toggle::ToggleWidget;

/// Event callback installed through a [`Host`].
pub type Listener = Box<dyn FnMut(&PageEvent) -> Response>;

/// The document a [`Page`] binds to.
pub trait Host {
    type Element: Surface + Clone + 'static;
    type Timers: Ticker<Handle: 'static>;
    type Calendar: LunarCalendar + 'static;

    /// Resolve a required element.
    ///
    /// # Errors
    ///
    /// [`SetupError::MissingElement`] when no element has `id`; hosts may
    /// also reject elements of the wrong kind.
    fn element(&self, role: &'static str, id: &str) -> Result<Self::Element, SetupError>;

    /// Attach `listener` for `kind` events on `target` for the page lifetime.
    ///
    /// # Errors
    ///
    /// [`SetupError::Listener`] when the listener cannot be attached.
    fn listen(&self, target: &Self::Element, kind: &str, listener: Listener) -> Result<(), SetupError>;

    /// Attach `listener` at the document level.
    ///
    /// # Errors
    ///
    /// [`SetupError::Listener`] when the listener cannot be attached.
    fn listen_document(&self, kind: &str, listener: Listener) -> Result<(), SetupError>;

    /// Run `teardown` when the page unloads.
    ///
    /// # Errors
    ///
    /// [`SetupError::Listener`] when the hook cannot be attached.
    fn on_unload(&self, teardown: Box<dyn FnMut()>) -> Result<(), SetupError>;

    /// Set a page-wide marker. Returns `false` when it was already set, by
    /// any composer on this document.
    fn claim_marker(&self, name: &str) -> bool;

    fn timers(&self) -> &Self::Timers;

    fn calendar(&self) -> Self::Calendar;

    fn clock_source(&self) -> fn() -> OffsetDateTime;

    /// Resolve an element the widget can do without.
    fn optional_element(&self, id: &str) -> Option<Self::Element> {
        match self.element("optional", id) {
            Ok(el) => Some(el),
            Err(err) => {
                if !err.is_missing() {
                    log::warn!("{err}");
                }
                None
            }
        }
    }
}

/// Which widgets a [`Page::mount`] call bound.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MountReport {
    pub clock: bool,
    pub courses_dropdown: bool,
    pub support_dropdown: bool,
    pub mobile_menu: bool,
    pub admin_modal: bool,
}

impl MountReport {
    #[must_use]
    pub fn any(&self) -> bool {
        self.clock || self.courses_dropdown || self.support_dropdown || self.mobile_menu || self.admin_modal
    }
}

/// Owns the page's init-once state.
pub struct Page<H: Host> {
    host: H,
    config: UiConfig,
    clock_guard: ClockGuard,
}

impl<H: Host> Page<H> {
    #[must_use]
    pub fn new(host: H, config: UiConfig) -> Self {
        Self { host, config, clock_guard: ClockGuard::new() }
    }

    /// Bind every widget present on the page. Repeat calls, from this or any
    /// other `Page` on the same document, bind nothing new.
    pub fn mount(&mut self) -> MountReport {
        let mut report = MountReport {
            clock: settle("clock", self.mount_clock()),
            ..MountReport::default()
        };

        if !self.host.claim_marker(WIDGETS_BOUND_MARKER) {
            log::debug!("page widgets already bound");
            return report;
        }

        let host = &self.host;
        let ids = &self.config.ids;
        report.courses_dropdown = settle(
            "courses dropdown",
            mount_toggle(host, "courses dropdown", &ids.courses_button, &ids.courses_dropdown),
        );
        report.support_dropdown = settle(
            "support dropdown",
            mount_toggle(host, "support dropdown", &ids.support_button, &ids.support_dropdown),
        );
        report.mobile_menu = settle("mobile menu", mount_toggle(host, "mobile menu", &ids.hamburger, &ids.mobile_menu));
        report.admin_modal = settle("admin modal", mount_modal(host, ids));

        log::info!("page mounted: {report:?}");
        report
    }

    fn mount_clock(&mut self) -> Result<bool, SetupError> {
        if self.clock_guard.is_bound() {
            return Ok(false);
        }
        let display = self.host.element("clock display", &self.config.ids.live_time)?;
        if !self.host.claim_marker(CLOCK_BOUND_MARKER) {
            log::debug!("live clock already bound on this page");
            return Ok(false);
        }
        let formatter = LiveTimeFormatter::from_config(&self.config.clock)
            .unwrap_or_else(|err| {
                log::warn!("{err}; using default clock settings");
                LiveTimeFormatter::default()
            })
            .with_calendar(self.host.calendar());

        let slot: Rc<RefCell<Option<ClockHandle<<H::Timers as Ticker>::Handle>>>> = Rc::new(RefCell::new(None));
        let teardown = Rc::clone(&slot);
        self.host.on_unload(Box::new(move || {
            if let Some(mut handle) = teardown.borrow_mut().take() {
                handle.cancel();
            }
        }))?;

        let handle = start_clock(
            &mut self.clock_guard,
            display,
            formatter,
            self.host.clock_source(),
            self.host.timers(),
        );
        let started = handle.is_some();
        *slot.borrow_mut() = handle;
        Ok(started)
    }
}

/// Log a widget's setup outcome. Missing elements are expected and quiet.
fn settle(widget: &str, result: Result<bool, SetupError>) -> bool {
    match result {
        Ok(bound) => bound,
        Err(err) if err.is_missing() => {
            log::debug!("{widget} skipped: {err}");
            false
        }
        Err(err) => {
            log::warn!("{widget} not bound: {err}");
            false
        }
    }
}

/// Wrap a widget handler into a listener sharing the widget.
fn bind<W: 'static>(widget: &Rc<RefCell<W>>, handle: impl Fn(&mut W, &PageEvent) -> Response + 'static) -> Listener {
    let widget = Rc::clone(widget);
    Box::new(move |event: &PageEvent| {
        let Ok(mut widget) = widget.try_borrow_mut() else {
            log::warn!("dropping re-entrant page event");
            return Response::PASS;
        };
        handle(&mut widget, event)
    })
}

fn mount_toggle<H: Host>(host: &H, name: &'static str, trigger_id: &str, panel_id: &str) -> Result<bool, SetupError> {
    let trigger = host.element("toggle trigger", trigger_id)?;
    let panel = host.element("toggle panel", panel_id)?;
    let widget = Rc::new(RefCell::new(
        ToggleWidget::new(trigger.clone(), panel.clone()).with_observer(move |open| log::debug!("{name} open={open}")),
    ));

    host.listen(&trigger, "click", bind(&widget, |w, _| w.on_trigger_click()))?;
    host.listen(&panel, "click", bind(&widget, |w, _| w.on_panel_click()))?;
    host.listen_document("click", bind(&widget, |w, _| w.on_document_click()))?;
    host.listen_document(
        "keydown",
        bind(&widget, |w, ev| ev.key.as_ref().map_or(Response::PASS, |key| w.on_key_down(key))),
    )?;
    Ok(true)
}

fn mount_modal<H: Host>(host: &H, ids: &ElementIds) -> Result<bool, SetupError> {
    let dialog = host.element("modal dialog", &ids.admin_modal)?;
    let opener = host.element("modal opener", &ids.login_button)?;
    let close = host.optional_element(&ids.close_modal);
    let cancel = host.optional_element(&ids.cancel_modal);
    let submit = host.optional_element(&ids.admin_submit);
    let focus_target = host.optional_element(&ids.admin_phone);

    let modal = Rc::new(RefCell::new(ModalController::new(dialog.clone(), opener.clone(), focus_target)));

    host.listen(&opener, "click", bind(&modal, |m, _| m.on_open_click()))?;
    if let Some(close) = &close {
        host.listen(close, "click", bind(&modal, |m, _| m.on_close_click()))?;
    }
    if let Some(cancel) = &cancel {
        host.listen(cancel, "click", bind(&modal, |m, _| m.on_cancel_click()))?;
    }
    if let Some(submit) = &submit {
        host.listen(submit, "click", bind(&modal, |m, _| m.on_submit_click()))?;
    }
    // Only a click on the dialog element itself is a backdrop click.
    host.listen(&dialog, "click", bind(&modal, |m, ev| m.on_dialog_click(ev.at_target)))?;
    host.listen_document(
        "keydown",
        bind(&modal, |m, ev| ev.key.as_ref().map_or(Response::PASS, |key| m.on_key_down(key))),
    )?;
    Ok(true)
}
