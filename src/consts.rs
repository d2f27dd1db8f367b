//! Shared constants: default element ids, class and attribute names, clock
//! timing, and the Arabic labels used by the live time display.

// =============================================================
// Element ids
// =============================================================

/// Text node refreshed by the live clock.
pub const LIVE_TIME_ID: &str = "liveTime";

pub const COURSES_DROPDOWN_ID: &str = "coursesDropdown";
pub const COURSES_BUTTON_ID: &str = "coursesBtn";
pub const SUPPORT_DROPDOWN_ID: &str = "supportDropdown";
pub const SUPPORT_BUTTON_ID: &str = "supportBtn";

pub const MOBILE_MENU_ID: &str = "menu";
pub const HAMBURGER_ID: &str = "hamburger";

pub const ADMIN_MODAL_ID: &str = "adminModal";
pub const LOGIN_BUTTON_ID: &str = "loginBtn";
pub const CLOSE_MODAL_ID: &str = "closeAdminModal";
pub const CANCEL_MODAL_ID: &str = "cancelAdminModal";
pub const ADMIN_PHONE_ID: &str = "adminPhone";
pub const ADMIN_SUBMIT_ID: &str = "adminLoginSubmit";

/// Attributes set on `<html>` once the clock / the widgets are bound, so a
/// second composer on the same document binds nothing.
pub const CLOCK_BOUND_MARKER: &str = "data-thqaf-clock-bound";
pub const WIDGETS_BOUND_MARKER: &str = "data-thqaf-widgets-bound";

/// `<script type="application/json">` element holding an optional `UiConfig`.
pub const CONFIG_SCRIPT_ID: &str = "thqaf-ui-config";

// =============================================================
// Classes and attributes
// =============================================================

/// Class present on an open dropdown or mobile menu panel.
pub const OPEN_CLASS: &str = "open";
/// Class present on a visible modal.
pub const ACTIVE_CLASS: &str = "active";

pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_HIDDEN: &str = "aria-hidden";

pub const ESCAPE_KEY: &str = "Escape";

// =============================================================
// Clock
// =============================================================

/// Interval between live clock refreshes.
pub const TICK_PERIOD_MS: u32 = 1_000;

/// Asia/Riyadh has no DST; the reference dates are computed at UTC+03:00.
pub const REFERENCE_OFFSET_MINUTES: i32 = 180;

/// Largest offset accepted from configuration, matching `time::UtcOffset`.
pub const MAX_OFFSET_MINUTES: i32 = 18 * 60;

pub const LIVE_TIME_LABEL: &str = "الوقت الآن:";
pub const SEGMENT_SEPARATOR: &str = " | ";
/// The Gregorian segment is preceded by a wider gap than the Hijri one.
pub const TRAILING_SEPARATOR: &str = "  | ";
pub const AM_MARKER: &str = "ص";
pub const PM_MARKER: &str = "م";
pub const HIJRI_ERA: &str = "هـ";
pub const GREGORIAN_ERA: &str = "م";
pub const WEEKDAY_SEPARATOR: &str = "، ";
pub const DATE_SEPARATOR: char = '/';

/// Weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];
