//! In-memory page, host and timer doubles for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use time::OffsetDateTime;
use time::macros::datetime;

use crate::clock::Ticker;
use crate::config::ElementIds;
use crate::error::SetupError;
use crate::hijri::TabularCalendar;
use crate::input::{Key, PageEvent, Response};
use crate::page::{Host, Listener};
use crate::surface::Surface;

#[derive(Default)]
struct ElementState {
    classes: HashSet<String>,
    attributes: HashMap<String, String>,
    text: String,
}

#[derive(Default)]
struct DomState {
    elements: HashMap<String, ElementState>,
    focused: Option<String>,
    writes: usize,
}

/// A fake document that hands out [`FakeElement`]s sharing its state.
#[derive(Clone, Default)]
pub(crate) struct FakeDom {
    state: Rc<RefCell<DomState>>,
}

impl FakeDom {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn element(&self, id: &str) -> FakeElement {
        self.state.borrow_mut().elements.entry(id.to_owned()).or_default();
        FakeElement { id: id.to_owned(), dom: self.clone() }
    }

    pub(crate) fn has_class(&self, id: &str, class: &str) -> bool {
        self.state.borrow().elements.get(id).is_some_and(|e| e.classes.contains(class))
    }

    pub(crate) fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.state.borrow().elements.get(id).and_then(|e| e.attributes.get(name).cloned())
    }

    pub(crate) fn text(&self, id: &str) -> String {
        self.state.borrow().elements.get(id).map(|e| e.text.clone()).unwrap_or_default()
    }

    pub(crate) fn focused(&self) -> Option<String> {
        self.state.borrow().focused.clone()
    }

    /// Number of mutating calls made through any element.
    pub(crate) fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    fn write(&self, id: &str, apply: impl FnOnce(&mut ElementState)) {
        let mut state = self.state.borrow_mut();
        state.writes += 1;
        apply(state.elements.entry(id.to_owned()).or_default());
    }
}

/// Handle to one element of a [`FakeDom`].
#[derive(Clone)]
pub(crate) struct FakeElement {
    id: String,
    dom: FakeDom,
}

impl Surface for FakeElement {
    fn add_class(&self, class: &str) {
        self.dom.write(&self.id, |e| {
            e.classes.insert(class.to_owned());
        });
    }

    fn remove_class(&self, class: &str) {
        self.dom.write(&self.id, |e| {
            e.classes.remove(class);
        });
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.dom.write(&self.id, |e| {
            e.attributes.insert(name.to_owned(), value.to_owned());
        });
    }

    fn set_text(&self, text: &str) {
        self.dom.write(&self.id, |e| e.text = text.to_owned());
    }

    fn focus(&self) {
        let mut state = self.dom.state.borrow_mut();
        state.writes += 1;
        state.focused = Some(self.id.clone());
    }
}

#[derive(Default)]
struct TickerState {
    callbacks: Vec<Option<Box<dyn FnMut()>>>,
    cancelled: usize,
}

/// Manual timer source: ticks only when the test calls [`FakeTicker::fire`].
#[derive(Clone, Default)]
pub(crate) struct FakeTicker {
    state: Rc<RefCell<TickerState>>,
}

impl FakeTicker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Timers ever started.
    pub(crate) fn started(&self) -> usize {
        self.state.borrow().callbacks.len()
    }

    /// Timers currently live.
    pub(crate) fn active(&self) -> usize {
        self.state.borrow().callbacks.iter().filter(|c| c.is_some()).count()
    }

    pub(crate) fn cancelled(&self) -> usize {
        self.state.borrow().cancelled
    }

    /// Run every live timer once.
    pub(crate) fn fire(&self) {
        let count = self.state.borrow().callbacks.len();
        for index in 0..count {
            let taken = self.state.borrow_mut().callbacks[index].take();
            if let Some(mut tick) = taken {
                tick();
                self.state.borrow_mut().callbacks[index] = Some(tick);
            }
        }
    }
}

/// Handle returned by [`FakeTicker`]; dropping it cancels the timer.
pub(crate) struct FakeTimer {
    index: usize,
    state: Rc<RefCell<TickerState>>,
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        if state.callbacks[self.index].take().is_some() {
            state.cancelled += 1;
        }
    }
}

impl Ticker for FakeTicker {
    type Handle = FakeTimer;

    fn every(&self, _period_ms: u32, tick: Box<dyn FnMut()>) -> FakeTimer {
        let mut state = self.state.borrow_mut();
        state.callbacks.push(Some(tick));
        FakeTimer { index: state.callbacks.len() - 1, state: Rc::clone(&self.state) }
    }
}

// =============================================================
// Host
// =============================================================

type SharedListener = Rc<RefCell<Listener>>;

struct Registration {
    /// Element id, or `None` for the document.
    target: Option<String>,
    kind: String,
    listener: SharedListener,
}

#[derive(Default)]
struct HostState {
    present: HashSet<String>,
    markers: HashSet<String>,
    listeners: Vec<Registration>,
    teardown: Vec<Box<dyn FnMut()>>,
}

/// A document with a fixed set of element ids. Clones share one document,
/// so several `Page`s can be composed over it.
#[derive(Clone, Default)]
pub(crate) struct FakeHost {
    dom: FakeDom,
    ticker: FakeTicker,
    state: Rc<RefCell<HostState>>,
}

/// The instant every [`FakeHost`] clock reports.
pub(crate) fn fixed_now() -> OffsetDateTime {
    datetime!(2026-10-16 15:05:09 +3)
}

impl FakeHost {
    /// A document containing exactly `ids`.
    pub(crate) fn with_elements(ids: &[&str]) -> Self {
        let host = Self::default();
        host.state.borrow_mut().present.extend(ids.iter().map(|id| (*id).to_owned()));
        host
    }

    /// A document containing every default element id.
    pub(crate) fn stock() -> Self {
        let ids = ElementIds::default();
        Self::with_elements(&[
            ids.live_time.as_str(),
            ids.courses_dropdown.as_str(),
            ids.courses_button.as_str(),
            ids.support_dropdown.as_str(),
            ids.support_button.as_str(),
            ids.mobile_menu.as_str(),
            ids.hamburger.as_str(),
            ids.admin_modal.as_str(),
            ids.login_button.as_str(),
            ids.close_modal.as_str(),
            ids.cancel_modal.as_str(),
            ids.admin_phone.as_str(),
            ids.admin_submit.as_str(),
        ])
    }

    /// Drop `id` from the document.
    pub(crate) fn without(self, id: &str) -> Self {
        self.state.borrow_mut().present.remove(id);
        self
    }

    pub(crate) fn dom(&self) -> &FakeDom {
        &self.dom
    }

    pub(crate) fn has_marker(&self, name: &str) -> bool {
        self.state.borrow().markers.contains(name)
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Click `path[0]`, bubbling through its ancestors in `path` and then
    /// the document until a listener stops propagation.
    pub(crate) fn click(&self, path: &[&str]) -> Response {
        let mut response = Response::PASS;
        for (depth, id) in path.iter().enumerate() {
            response = response.merge(self.dispatch(Some(id), "click", &PageEvent::click(depth == 0)));
            if response.stop_propagation {
                return response;
            }
        }
        response.merge(self.dispatch(None, "click", &PageEvent::click(path.is_empty())))
    }

    /// Press `key` with focus in the document.
    pub(crate) fn key_down(&self, key: &str) -> Response {
        self.dispatch(None, "keydown", &PageEvent::key_down(Key::new(key)))
    }

    /// Run every unload hook.
    pub(crate) fn unload(&self) {
        let mut hooks = std::mem::take(&mut self.state.borrow_mut().teardown);
        for hook in &mut hooks {
            hook();
        }
        self.state.borrow_mut().teardown = hooks;
    }

    fn dispatch(&self, target: Option<&str>, kind: &str, event: &PageEvent) -> Response {
        let matching: Vec<SharedListener> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|r| r.target.as_deref() == target && r.kind == kind)
            .map(|r| Rc::clone(&r.listener))
            .collect();
        let mut response = Response::PASS;
        for listener in matching {
            let mut listener = listener.borrow_mut();
            response = response.merge((*listener)(event));
        }
        response
    }

    fn register(&self, target: Option<String>, kind: &str, listener: Listener) {
        self.state.borrow_mut().listeners.push(Registration {
            target,
            kind: kind.to_owned(),
            listener: Rc::new(RefCell::new(listener)),
        });
    }
}

impl Host for FakeHost {
    type Element = FakeElement;
    type Timers = FakeTicker;
    type Calendar = TabularCalendar;

    fn element(&self, role: &'static str, id: &str) -> Result<FakeElement, SetupError> {
        if !self.state.borrow().present.contains(id) {
            return Err(SetupError::MissingElement { role, id: id.to_owned() });
        }
        Ok(self.dom.element(id))
    }

    fn listen(&self, target: &FakeElement, kind: &str, listener: Listener) -> Result<(), SetupError> {
        self.register(Some(target.id.clone()), kind, listener);
        Ok(())
    }

    fn listen_document(&self, kind: &str, listener: Listener) -> Result<(), SetupError> {
        self.register(None, kind, listener);
        Ok(())
    }

    fn on_unload(&self, teardown: Box<dyn FnMut()>) -> Result<(), SetupError> {
        self.state.borrow_mut().teardown.push(teardown);
        Ok(())
    }

    fn claim_marker(&self, name: &str) -> bool {
        self.state.borrow_mut().markers.insert(name.to_owned())
    }

    fn timers(&self) -> &FakeTicker {
        &self.ticker
    }

    fn calendar(&self) -> TabularCalendar {
        TabularCalendar
    }

    fn clock_source(&self) -> fn() -> OffsetDateTime {
        fixed_now
    }
}
