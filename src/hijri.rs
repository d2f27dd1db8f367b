//! Tabular Islamic (Hijri) calendar.
//!
//! Arithmetic civil calendar: epoch 1 Muharram 1 AH = JDN 1948440 (Friday,
//! 16 July 622 Julian), 30-year cycles of 10631 days with leap years 2, 5, 7,
//! 10, 13, 16, 18, 21, 24, 26 and 29. Odd months have 30 days, even months 29,
//! and month 12 gains a day in leap years.
//!
//! TRADE-OFFS
//! ==========
//! Observation-based calendars (Umm al-Qura) can differ from the tabular
//! date by a day around month starts. The browser build asks the platform's
//! `Intl` calendar through [`LunarCalendar`] and falls back to this
//! arithmetic; native builds and tests use [`TabularCalendar`] directly.

#[cfg(test)]
#[path = "hijri_test.rs"]
mod hijri_test;

use time::Date;

/// Julian day number of 1 Muharram 1 AH.
pub const EPOCH_JDN: i64 = 1_948_440;

const DAYS_PER_CYCLE: i64 = 10_631;
const LEAP_YEARS: [i32; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Source of the Hijri date shown for a civil day.
pub trait LunarCalendar {
    fn hijri(&self, date: Date) -> HijriDate;
}

/// The arithmetic calendar implemented by [`HijriDate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabularCalendar;

impl LunarCalendar for TabularCalendar {
    fn hijri(&self, date: Date) -> HijriDate {
        HijriDate::from_gregorian(date)
    }
}

/// A Hijri calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HijriDate {
    pub year: i32,
    /// 1 (Muharram) through 12 (Dhu al-Hijjah).
    pub month: u8,
    pub day: u8,
}

impl HijriDate {
    /// A date read from an external calendar. Months run 1..=12 and days
    /// 1..=30; month lengths are not checked, since observed months do not
    /// follow the tabular pattern.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return None;
        }
        Some(Self { year, month: month as u8, day: day as u8 })
    }

    /// Convert a Julian day number.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_julian_day(jdn: i64) -> Self {
        let mut l = jdn - EPOCH_JDN + 10_632;
        let n = (l - 1).div_euclid(DAYS_PER_CYCLE);
        l = l - DAYS_PER_CYCLE * n + 354;
        let j = (10_985 - l).div_euclid(5_316) * (50 * l).div_euclid(17_719)
            + l.div_euclid(5_670) * (43 * l).div_euclid(15_238);
        l = l - (30 - j).div_euclid(15) * (17_719 * j).div_euclid(50)
            - j.div_euclid(16) * (15_238 * j).div_euclid(43)
            + 29;
        let month = (24 * l).div_euclid(709);
        let day = l - (709 * month).div_euclid(24);
        let year = 30 * n + j - 30;
        // month is 1..=12 and day 1..=30 by construction.
        Self { year: year as i32, month: month as u8, day: day as u8 }
    }

    /// Convert a proleptic Gregorian date.
    #[must_use]
    pub fn from_gregorian(date: Date) -> Self {
        Self::from_julian_day(i64::from(date.to_julian_day()))
    }

    /// The Julian day number of this date.
    #[must_use]
    pub fn to_julian_day(self) -> i64 {
        let year = i64::from(self.year);
        let month = i64::from(self.month);
        i64::from(self.day)
            + (59 * (month - 1) + 1).div_euclid(2)
            + 354 * (year - 1)
            + (3 + 11 * year).div_euclid(30)
            + EPOCH_JDN
            - 1
    }

    /// Whether `year` has 355 days.
    #[must_use]
    pub fn is_leap_year(year: i32) -> bool {
        LEAP_YEARS.contains(&year.rem_euclid(30))
    }

    /// Length of `month` in `year`; zero for an invalid month.
    #[must_use]
    pub fn days_in_month(year: i32, month: u8) -> u8 {
        match month {
            12 if Self::is_leap_year(year) => 30,
            1..=12 if month % 2 == 1 => 30,
            1..=12 => 29,
            _ => 0,
        }
    }
}
