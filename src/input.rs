//! Input model: keyboard keys and what a handler wants done with its event.
//!
//! Widget handlers never touch the DOM event itself. They return a
//! [`Response`] and the binding layer applies it, which keeps every widget
//! testable without a browser.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::ESCAPE_KEY;

/// A keyboard key as reported by the browser (`KeyboardEvent.key`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn escape() -> Self {
        Self::new(ESCAPE_KEY)
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == ESCAPE_KEY
    }
}

/// What a widget handler sees of a DOM event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageEvent {
    /// `KeyboardEvent.key`; `None` for other events.
    pub key: Option<Key>,
    /// Dispatched on the listening element itself rather than a descendant.
    pub at_target: bool,
}

impl PageEvent {
    #[must_use]
    pub fn click(at_target: bool) -> Self {
        Self { key: None, at_target }
    }

    #[must_use]
    pub fn key_down(key: Key) -> Self {
        Self { key: Some(key), at_target: false }
    }
}

/// Side effects a handler requests on the DOM event that invoked it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// Keep the event from reaching ancestor (document-level) handlers.
    pub stop_propagation: bool,
    /// Suppress the browser's default action (e.g. following a link).
    pub prevent_default: bool,
}

impl Response {
    /// Let the event continue untouched.
    pub const PASS: Self = Self { stop_propagation: false, prevent_default: false };
    /// Swallow the event before it reaches the document.
    pub const STOP: Self = Self { stop_propagation: true, prevent_default: false };
    /// Cancel the default action but keep bubbling.
    pub const PREVENT: Self = Self { stop_propagation: false, prevent_default: true };

    /// Combine the requests of several handlers for one event.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            stop_propagation: self.stop_propagation || other.stop_propagation,
            prevent_default: self.prevent_default || other.prevent_default,
        }
    }
}
