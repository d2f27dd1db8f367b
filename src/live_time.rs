//! Localized live time string: time of day, Hijri date, Gregorian date.
//!
//! Renders `ar-SA` output. Only the Hijri date comes from outside, through a
//! [`LunarCalendar`]; the rest is fixed text:
//!
//! ```text
//! الوقت الآن: ٠٣:٠٥:٠٩ م | الجمعة، ٠٤/٠٥/١٤٤٨ هـ  | الجمعة، ١٦/١٠/٢٠٢٦ م
//! ```
//!
//! The time of day is taken in the instant's own offset (the viewer's zone)
//! unless an override is configured. Both dates use the reference offset.

#[cfg(test)]
#[path = "live_time_test.rs"]
mod live_time_test;

use time::{Date, OffsetDateTime, Time, UtcOffset};

use crate::config::{ClockConfig, Numerals};
use crate::consts::*;
use crate::error::ConfigError;
use crate::hijri::{LunarCalendar, TabularCalendar};

/// Formats instants for the live clock element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveTimeFormatter<C = TabularCalendar> {
    numerals: Numerals,
    reference_offset: UtcOffset,
    time_offset: Option<UtcOffset>,
    calendar: C,
}

impl Default for LiveTimeFormatter {
    fn default() -> Self {
        Self::new(Numerals::Arabic, riyadh_offset(), None)
    }
}

impl LiveTimeFormatter {
    #[must_use]
    pub fn new(numerals: Numerals, reference_offset: UtcOffset, time_offset: Option<UtcOffset>) -> Self {
        Self { numerals, reference_offset, time_offset, calendar: TabularCalendar }
    }

    /// Build from clock configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOffset`] for out-of-range offsets.
    pub fn from_config(config: &ClockConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.numerals, config.reference_offset()?, config.time_offset()?))
    }
}

impl<C: LunarCalendar> LiveTimeFormatter<C> {
    /// Same settings, Hijri dates taken from `calendar`.
    #[must_use]
    pub fn with_calendar<D: LunarCalendar>(self, calendar: D) -> LiveTimeFormatter<D> {
        LiveTimeFormatter {
            numerals: self.numerals,
            reference_offset: self.reference_offset,
            time_offset: self.time_offset,
            calendar,
        }
    }

    /// Full display string for `now`.
    #[must_use]
    pub fn format(&self, now: OffsetDateTime) -> String {
        let local = self.time_offset.map_or(now, |offset| now.to_offset(offset));
        let reference = now.to_offset(self.reference_offset).date();

        let time = self.time_of_day(local.time());
        let hijri = self.hijri_date(reference);
        let gregorian = self.gregorian_date(reference);

        format!(
            "{LIVE_TIME_LABEL} {time}{SEGMENT_SEPARATOR}{hijri}{TRAILING_SEPARATOR}{gregorian} {GREGORIAN_ERA}"
        )
    }

    /// `hh:mm:ss` on a 12-hour clock followed by the day-period marker.
    #[must_use]
    pub fn time_of_day(&self, time: Time) -> String {
        let (hour, minute, second) = time.as_hms();
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        let marker = if hour < 12 { AM_MARKER } else { PM_MARKER };
        let digits = format!("{hour12:02}:{minute:02}:{second:02}");
        format!("{} {marker}", localize_digits(&digits, self.numerals))
    }

    /// Weekday and `dd/mm/yyyy` Hijri date with the AH suffix.
    #[must_use]
    pub fn hijri_date(&self, date: Date) -> String {
        let hijri = self.calendar.hijri(date);
        let mut out = self.dated(date, hijri.day, hijri.month, hijri.year);
        out.push(' ');
        out.push_str(HIJRI_ERA);
        out
    }

    /// Weekday and `dd/mm/yyyy` Gregorian date, without the era suffix.
    #[must_use]
    pub fn gregorian_date(&self, date: Date) -> String {
        self.dated(date, date.day(), u8::from(date.month()), date.year())
    }

    fn dated(&self, date: Date, day: u8, month: u8, year: i32) -> String {
        let digits = format!("{day:02}{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{year}");
        format!("{}{WEEKDAY_SEPARATOR}{}", weekday_name(date), localize_digits(&digits, self.numerals))
    }
}

/// Fixed UTC+03:00.
#[must_use]
pub fn riyadh_offset() -> UtcOffset {
    time::macros::offset!(+3)
}

/// Arabic weekday name for `date`.
#[must_use]
pub fn weekday_name(date: Date) -> &'static str {
    WEEKDAY_NAMES[usize::from(date.weekday().number_days_from_sunday())]
}

/// Read the number written in `text`, accepting ASCII and Arabic-Indic
/// digits and skipping everything else. `None` when there are no digits.
#[must_use]
pub fn parse_digits(text: &str) -> Option<u32> {
    let mut value: Option<u32> = None;
    for c in text.chars() {
        let digit = match c {
            '0'..='9' => u32::from(c) - u32::from('0'),
            '\u{0660}'..='\u{0669}' => u32::from(c) - 0x0660,
            _ => continue,
        };
        value = Some(value.unwrap_or(0).checked_mul(10)?.checked_add(digit)?);
    }
    value
}

/// Replace ASCII digits with the requested numeral shapes.
#[must_use]
pub fn localize_digits(text: &str, numerals: Numerals) -> String {
    match numerals {
        Numerals::Latin => text.to_owned(),
        Numerals::Arabic => text
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
                None => c,
            })
            .collect(),
    }
}
