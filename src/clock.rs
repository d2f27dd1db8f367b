//! Live clock scheduling.
//!
//! DESIGN
//! ======
//! [`ClockGuard`] is the page's init-once context: whoever composes the page
//! owns one and hands it to [`start_clock`], so a second setup pass finds the
//! guard already bound and starts nothing. The timer itself comes from a
//! [`Ticker`]; the returned [`ClockHandle`] owns it and cancelling (or
//! dropping) the handle stops the ticks.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;

use crate::consts::TICK_PERIOD_MS;
use crate::hijri::LunarCalendar;
use crate::live_time::LiveTimeFormatter;
use crate::surface::Surface;

/// Source of repeating timers. Dropping the returned handle cancels the timer.
pub trait Ticker {
    type Handle: 'static;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Records whether the live clock has been started on this page.
#[derive(Debug, Default)]
pub struct ClockGuard {
    bound: bool,
}

impl ClockGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Claim the guard. Returns `false` if it was already claimed.
    fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.bound, true)
    }
}

/// Owner of the running clock timer.
#[derive(Debug)]
pub struct ClockHandle<H> {
    timer: Option<H>,
}

impl<H> ClockHandle<H> {
    /// Stop the clock. Returns `true` only for the call that actually stopped it.
    pub fn cancel(&mut self) -> bool {
        self.timer.take().is_some()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

/// Render the clock into `display` now, then every second.
///
/// Returns `None` without touching `display` when `guard` is already bound.
pub fn start_clock<S, C, T, N>(
    guard: &mut ClockGuard,
    display: S,
    formatter: LiveTimeFormatter<C>,
    now: N,
    ticker: &T,
) -> Option<ClockHandle<T::Handle>>
where
    S: Surface + 'static,
    C: LunarCalendar + 'static,
    T: Ticker,
    N: Fn() -> OffsetDateTime + 'static,
{
    if !guard.claim() {
        log::debug!("live clock already running; skipping second start");
        return None;
    }

    let update = move || display.set_text(&formatter.format(now()));
    update();
    let timer = ticker.every(TICK_PERIOD_MS, Box::new(update));
    log::debug!("live clock started");
    Some(ClockHandle { timer: Some(timer) })
}
