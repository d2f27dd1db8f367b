//! Page chrome for the Thqaf site: live clock, header dropdowns, mobile menu
//! and the admin login dialog.
//!
//! This crate is compiled to WebAssembly and binds to server-rendered
//! markup. The widgets themselves are plain state machines over the
//! [`surface::Surface`] trait and the page is composed over
//! [`page::Host`], so everything except the browser glue builds and tests
//! natively. The glue (`dom`, `entry`) is behind the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`clock`] | Init-once guard and the one-second refresh loop |
//! | [`live_time`] | Arabic time / Hijri / Gregorian display string |
//! | [`hijri`] | Hijri calendar seam and tabular arithmetic |
//! | [`toggle`] | Dropdown and mobile menu open/close widget |
//! | [`modal`] | Admin dialog open/close and focus handling |
//! | [`input`] | Keys and handler responses |
//! | [`surface`] | Element handle trait |
//! | [`config`] | Element ids and clock settings |
//! | [`error`] | Setup and config errors |
//! | [`consts`] | Ids, class names, labels |
//! | [`page`] | Page composition over a `Host`, init-once markers |
//! | `dom` | Browser `Host`, `Intl` calendar, web-sys bindings (hydrate) |
//! | `entry` | WASM start and `PageWiring` (hydrate) |

pub mod clock;
pub mod config;
pub mod consts;
pub mod error;
pub mod hijri;
pub mod input;
pub mod live_time;
pub mod modal;
pub mod page;
pub mod surface;
pub mod toggle;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod entry;

#[cfg(test)]
mod testing;
