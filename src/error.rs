//! Error types for page setup and configuration.
//!
//! DESIGN
//! ======
//! A missing element is an expected condition on pages that omit a widget;
//! callers match on [`SetupError::MissingElement`] and skip quietly. Every
//! other variant points at a broken page or host and is worth a warning.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure while binding one widget to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{role} element #{id} not found")]
    MissingElement { role: &'static str, id: String },

    #[error("element #{id} is not an HTML element")]
    NotHtmlElement { id: String },

    #[error("failed to attach {event} listener: {message}")]
    Listener { event: String, message: String },
}

impl SetupError {
    /// Whether this error means the widget is simply absent from the page.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingElement { .. })
    }
}

/// Failure while reading a [`crate::config::UiConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("utc offset of {minutes} minutes is out of range")]
    InvalidOffset { minutes: i32 },
}
