//! Debounced reaction to viewport resizes.
//!
//! Every raw resize signal issues a [`ResizeTicket`] tagged with a fresh
//! generation. The host waits out the ticket's delay and hands it back; only
//! the ticket from the most recent signal settles, so a burst of signals
//! coalesces into one relayout and a signal that arrives while an earlier
//! ticket is waiting restarts the timer.

use std::time::Duration;

/// Default debounce interval between the last resize signal and relayout.
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(400);

/// What a relayout triggered by a resize does with the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePolicy {
    /// Re-centre the window and re-anchor it, exactly like the first layout.
    #[default]
    Recenter,
    /// Keep the previous first item, clamped so the new window still fits.
    PreserveStart,
}

/// Permission to relayout once the debounce delay has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeTicket {
    generation: u64,
    delay: Duration,
}

impl ResizeTicket {
    /// How long to wait before handing the ticket back.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits out the ticket's delay on the tokio timer and returns it.
    pub async fn elapsed(self) -> Self {
        tokio::time::sleep(self.delay).await;
        self
    }
}

/// Generation-tagged debounce timer for one scroller instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeReactor {
    interval: Duration,
    generation: u64,
    pending_signals: u64,
    disposed: bool,
}

impl ResizeReactor {
    /// Creates a reactor coalescing signals within `interval`.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            pending_signals: 0,
            disposed: false,
        }
    }

    /// Returns true while a signal is waiting for its ticket to settle.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending_signals > 0
    }

    /// Records a raw resize signal and issues the ticket that supersedes all
    /// earlier ones.
    ///
    /// Returns `None` once the reactor has been disposed.
    pub const fn signal(&mut self) -> Option<ResizeTicket> {
        if self.disposed {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.pending_signals = self.pending_signals.saturating_add(1);
        Some(ResizeTicket {
            generation: self.generation,
            delay: self.interval,
        })
    }

    /// Settles `ticket` if it is the newest one issued.
    ///
    /// Returns the number of raw signals coalesced into this settlement, or
    /// `None` for stale tickets and for any ticket after disposal.
    pub fn settle(&mut self, ticket: ResizeTicket) -> Option<u64> {
        if self.disposed || ticket.generation != self.generation || self.pending_signals == 0 {
            tracing::trace!(
                generation = ticket.generation,
                latest = self.generation,
                "dropping stale resize ticket"
            );
            return None;
        }
        Some(std::mem::take(&mut self.pending_signals))
    }

    /// Stops the reactor; no ticket settles afterwards.
    pub const fn dispose(&mut self) {
        self.disposed = true;
        self.pending_signals = 0;
    }
}

impl Default for ResizeReactor {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE)
    }
}
