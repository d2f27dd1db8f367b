//! Page configuration: which element ids to bind and how to render the clock.
//!
//! Every field has a default matching the site's templates, so an empty JSON
//! object (or no config at all) binds the stock page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use time::UtcOffset;

use crate::consts::*;
use crate::error::ConfigError;

/// Top-level configuration for [`crate::page`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub ids: ElementIds,
    pub clock: ClockConfig,
}

impl UiConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::InvalidOffset`] when an offset exceeds ±18 hours.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.clock.reference_offset()?;
        config.clock.time_offset()?;
        Ok(config)
    }
}

/// Element ids the page widgets bind to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub live_time: String,
    pub courses_dropdown: String,
    pub courses_button: String,
    pub support_dropdown: String,
    pub support_button: String,
    pub mobile_menu: String,
    pub hamburger: String,
    pub admin_modal: String,
    pub login_button: String,
    pub close_modal: String,
    pub cancel_modal: String,
    pub admin_phone: String,
    pub admin_submit: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            live_time: LIVE_TIME_ID.to_owned(),
            courses_dropdown: COURSES_DROPDOWN_ID.to_owned(),
            courses_button: COURSES_BUTTON_ID.to_owned(),
            support_dropdown: SUPPORT_DROPDOWN_ID.to_owned(),
            support_button: SUPPORT_BUTTON_ID.to_owned(),
            mobile_menu: MOBILE_MENU_ID.to_owned(),
            hamburger: HAMBURGER_ID.to_owned(),
            admin_modal: ADMIN_MODAL_ID.to_owned(),
            login_button: LOGIN_BUTTON_ID.to_owned(),
            close_modal: CLOSE_MODAL_ID.to_owned(),
            cancel_modal: CANCEL_MODAL_ID.to_owned(),
            admin_phone: ADMIN_PHONE_ID.to_owned(),
            admin_submit: ADMIN_SUBMIT_ID.to_owned(),
        }
    }
}

/// Digit shapes used in the live time display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Numerals {
    /// Arabic-Indic digits (٠١٢٣٤٥٦٧٨٩), as rendered for `ar-SA`.
    #[default]
    Arabic,
    /// ASCII digits.
    Latin,
}

/// Live clock settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub numerals: Numerals,
    /// Offset used for both calendar dates.
    pub reference_offset_minutes: i32,
    /// Offset for the time of day; `None` uses the viewer's local zone.
    pub time_offset_minutes: Option<i32>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            numerals: Numerals::default(),
            reference_offset_minutes: REFERENCE_OFFSET_MINUTES,
            time_offset_minutes: None,
        }
    }
}

impl ClockConfig {
    /// The calendar reference offset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOffset`] when out of range.
    pub fn reference_offset(&self) -> Result<UtcOffset, ConfigError> {
        offset_from_minutes(self.reference_offset_minutes)
    }

    /// The time-of-day override, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOffset`] when out of range.
    pub fn time_offset(&self) -> Result<Option<UtcOffset>, ConfigError> {
        self.time_offset_minutes.map(offset_from_minutes).transpose()
    }
}

/// Convert signed minutes east of UTC into a `UtcOffset`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidOffset`] outside ±18 hours.
pub fn offset_from_minutes(minutes: i32) -> Result<UtcOffset, ConfigError> {
    if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
        return Err(ConfigError::InvalidOffset { minutes });
    }
    let seconds = minutes.checked_mul(60).ok_or(ConfigError::InvalidOffset { minutes })?;
    UtcOffset::from_whole_seconds(seconds).map_err(|_| ConfigError::InvalidOffset { minutes })
}
