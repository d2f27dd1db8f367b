//! Browser bindings: the [`Host`] a [`crate::page::Page`] binds through.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module besides `entry` that touches `web_sys`.
//! Everything here is thin glue that turns DOM events into [`PageEvent`]s,
//! widget writes into DOM mutations, and `Intl` output into Hijri dates.

use gloo_timers::callback::Interval;
use js_sys::Intl::DateTimeFormat;
use js_sys::{Array, Object, Reflect};
use time::{Date, Duration, OffsetDateTime, UtcOffset};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, HtmlElement, KeyboardEvent, Window};

use crate::clock::Ticker;
use crate::error::SetupError;
use crate::hijri::{HijriDate, LunarCalendar};
use crate::input::{Key, PageEvent, Response};
use crate::live_time::parse_digits;
use crate::page::{Host, Listener};
use crate::surface::Surface;

/// Locale the page's Hijri date is read in.
const HIJRI_LOCALE: &str = "ar-SA-u-ca-islamic";

impl Surface for HtmlElement {
    fn add_class(&self, class: &str) {
        if let Err(err) = self.class_list().add_1(class) {
            log::warn!("add class {class} on #{}: {err:?}", self.id());
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.class_list().remove_1(class) {
            log::warn!("remove class {class} on #{}: {err:?}", self.id());
        }
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = web_sys::Element::set_attribute(self, name, value) {
            log::warn!("set {name} on #{}: {err:?}", self.id());
        }
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn focus(&self) {
        if let Err(err) = HtmlElement::focus(self) {
            log::warn!("focus #{}: {err:?}", self.id());
        }
    }
}

// =============================================================
// Host
// =============================================================

/// The live browser document.
#[derive(Clone)]
pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    /// `None` outside a browser window.
    #[must_use]
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Host for BrowserHost {
    type Element = HtmlElement;
    type Timers = BrowserTicker;
    type Calendar = IntlCalendar;

    fn element(&self, role: &'static str, id: &str) -> Result<HtmlElement, SetupError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| SetupError::MissingElement { role, id: id.to_owned() })?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SetupError::NotHtmlElement { id: id.to_owned() })
    }

    fn listen(&self, target: &HtmlElement, kind: &str, listener: Listener) -> Result<(), SetupError> {
        listen(target, kind, dispatch(listener))
    }

    fn listen_document(&self, kind: &str, listener: Listener) -> Result<(), SetupError> {
        listen(&self.document, kind, dispatch(listener))
    }

    fn on_unload(&self, mut teardown: Box<dyn FnMut()>) -> Result<(), SetupError> {
        listen(&self.window, "beforeunload", move |_| teardown())
    }

    /// Markers are attributes on `<html>`, visible to every module instance
    /// and script on the page.
    fn claim_marker(&self, name: &str) -> bool {
        let Some(root) = self.document.document_element() else {
            log::warn!("no document element; {name} not recorded");
            return true;
        };
        if root.has_attribute(name) {
            return false;
        }
        if let Err(err) = root.set_attribute(name, "1") {
            log::warn!("set {name}: {err:?}");
        }
        true
    }

    fn timers(&self) -> &BrowserTicker {
        &BrowserTicker
    }

    fn calendar(&self) -> IntlCalendar {
        IntlCalendar::new()
    }

    fn clock_source(&self) -> fn() -> OffsetDateTime {
        now
    }
}

// =============================================================
// Events
// =============================================================

/// Attach `handler` for `kind` events on `target` for the lifetime of the page.
///
/// # Errors
///
/// [`SetupError::Listener`] when the browser rejects the listener.
pub fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), SetupError> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
        .map_err(|err| SetupError::Listener { event: kind.to_owned(), message: format!("{err:?}") })?;
    callback.forget();
    Ok(())
}

/// Feed DOM events to `listener` and apply what it asks for.
fn dispatch(mut listener: Listener) -> impl FnMut(Event) + 'static {
    move |event: Event| {
        let response = listener(&page_event(&event));
        apply(&event, response);
    }
}

/// The parts of `event` widget handlers read.
pub fn page_event(event: &Event) -> PageEvent {
    let at_target = match (event.target(), event.current_target()) {
        (Some(target), Some(current)) => JsValue::from(target) == JsValue::from(current),
        _ => false,
    };
    PageEvent { key: key_of(event), at_target }
}

/// Carry out the side effects a handler asked for.
pub fn apply(event: &Event, response: Response) {
    if response.stop_propagation {
        event.stop_propagation();
    }
    if response.prevent_default {
        event.prevent_default();
    }
}

/// The key of a keyboard event; `None` for other events.
pub fn key_of(event: &Event) -> Option<Key> {
    event.dyn_ref::<KeyboardEvent>().map(|ev| Key::new(ev.key()))
}

// =============================================================
// Time
// =============================================================

/// `setInterval`-backed ticker; dropping the `Interval` clears it.
pub struct BrowserTicker;

impl Ticker for BrowserTicker {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }
}

/// The current instant in the viewer's local offset.
#[allow(clippy::cast_possible_truncation)]
pub fn now() -> OffsetDateTime {
    let date = js_sys::Date::new_0();
    let nanos = i128::from(date.get_time() as i64) * 1_000_000;
    let utc = OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH);
    // getTimezoneOffset is minutes west of UTC.
    let east_seconds = -(date.get_timezone_offset() as i32) * 60;
    let offset = UtcOffset::from_whole_seconds(east_seconds).unwrap_or(UtcOffset::UTC);
    utc.to_offset(offset)
}

/// Hijri dates from the platform's `ar-SA` Islamic calendar.
///
/// The civil day is handed to `Intl` as its UTC noon and read back in UTC,
/// so the caller's reference offset decides the day. Anything `Intl` cannot
/// answer falls back to the tabular calendar.
#[derive(Debug, Clone)]
pub struct IntlCalendar {
    format: DateTimeFormat,
}

impl IntlCalendar {
    #[must_use]
    pub fn new() -> Self {
        let locales = Array::of1(&JsValue::from_str(HIJRI_LOCALE));
        let options = Object::new();
        for (key, value) in [("timeZone", "UTC"), ("year", "numeric"), ("month", "numeric"), ("day", "numeric")] {
            if let Err(err) = Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value)) {
                log::warn!("hijri format option {key}: {err:?}");
            }
        }
        Self { format: DateTimeFormat::new(&locales, &options) }
    }

    #[allow(clippy::cast_precision_loss)]
    fn read(&self, date: Date) -> Option<HijriDate> {
        let noon = date.midnight().assume_utc() + Duration::hours(12);
        let millis = (noon.unix_timestamp() * 1_000) as f64;
        let parts = self.format.format_to_parts(&js_sys::Date::new(&JsValue::from_f64(millis)));

        let (mut year, mut month, mut day) = (None, None, None);
        for part in parts.iter() {
            let (Some(kind), Some(value)) = (part_field(&part, "type"), part_field(&part, "value")) else {
                continue;
            };
            match kind.as_str() {
                "year" => year = parse_digits(&value),
                "month" => month = parse_digits(&value),
                "day" => day = parse_digits(&value),
                _ => {}
            }
        }
        let Ok(year) = i32::try_from(year?) else {
            return None;
        };
        HijriDate::new(year, month?, day?)
    }
}

impl Default for IntlCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl LunarCalendar for IntlCalendar {
    fn hijri(&self, date: Date) -> HijriDate {
        self.read(date).unwrap_or_else(|| {
            log::debug!("Intl gave no hijri date for {date}; using tabular");
            HijriDate::from_gregorian(date)
        })
    }
}

/// A string property of an `Intl` part object.
fn part_field(part: &JsValue, key: &str) -> Option<String> {
    match Reflect::get(part, &JsValue::from_str(key)) {
        Ok(value) => value.as_string(),
        Err(err) => {
            log::debug!("Intl part {key}: {err:?}");
            None
        }
    }
}
