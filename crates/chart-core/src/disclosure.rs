// File: crates/chart-core/src/disclosure.rs
// Summary: Delayed show/hide of a hover description as an explicit two-timer debounce.
//
// Time is supplied by the caller, so the machine has no threads or callbacks of
// its own: the host polls it from its event loop.

use std::time::{Duration, Instant};

use tracing::trace;

/// Hover must rest this long before the description appears.
pub const SHOW_DELAY: Duration = Duration::from_millis(1000);
/// After leaving, the description lingers this long.
pub const HIDE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureEvent {
    Show,
    Hide,
}

#[derive(Clone, Debug)]
pub struct DisclosureTimers {
    show_delay: Duration,
    hide_delay: Duration,
    has_description: bool,
    shown: bool,
    pending_show: Option<Instant>,
    pending_hide: Option<Instant>,
}

impl DisclosureTimers {
    pub fn new(has_description: bool) -> Self {
        Self::with_delays(has_description, SHOW_DELAY, HIDE_DELAY)
    }

    pub fn with_delays(has_description: bool, show_delay: Duration, hide_delay: Duration) -> Self {
        Self {
            show_delay,
            hide_delay,
            has_description,
            shown: false,
            pending_show: None,
            pending_hide: None,
        }
    }

    pub fn is_shown(&self) -> bool { self.shown }

    pub fn pending_show(&self) -> Option<Instant> { self.pending_show }

    pub fn pending_hide(&self) -> Option<Instant> { self.pending_hide }

    /// Earliest armed deadline, for hosts that sleep until the next event.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.pending_show, self.pending_hide) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn pointer_enter(&mut self, now: Instant) {
        self.pending_hide = None;
        if self.has_description && !self.shown {
            // Re-entering restarts the countdown.
            self.pending_show = Some(now + self.show_delay);
            trace!("disclosure show armed");
        }
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        self.pending_show = None;
        if self.shown {
            self.pending_hide = Some(now + self.hide_delay);
            trace!("disclosure hide armed");
        }
    }

    /// Fire whichever timer is due at `now`. At most one of the two can be armed
    /// at a time, so at most one event results.
    pub fn poll(&mut self, now: Instant) -> Option<DisclosureEvent> {
        if self.pending_show.is_some_and(|at| now >= at) {
            self.pending_show = None;
            self.shown = true;
            return Some(DisclosureEvent::Show);
        }
        if self.pending_hide.is_some_and(|at| now >= at) {
            self.pending_hide = None;
            self.shown = false;
            return Some(DisclosureEvent::Hide);
        }
        None
    }

    /// Disarm both timers; nothing fires afterwards until re-armed.
    pub fn cancel(&mut self) {
        self.pending_show = None;
        self.pending_hide = None;
    }
}
