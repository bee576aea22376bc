//! Horizontally scrolling viewport window.
//!
//! A [`Scroller`] owns the state of one widget instance and drives the
//! layout calculator, the step navigator, the resize reactor and the
//! active-range notifier against a host-supplied [`MeasurementProvider`].
//!
//! # Commit and effect phases
//!
//! Every state change happens in two phases:
//!
//! 1. **Commit**: [`Scroller::recalculate`], [`Scroller::scroll_to`],
//!    [`Scroller::scroll_by`] and [`Scroller::resize_elapsed`] update the
//!    window and scroll state and queue effects.
//! 2. **Effect**: [`Scroller::run_effects`] notifies the active range and
//!    re-anchors the scroll offset.
//!
//! The host renders the committed state between the two calls so that the
//! effect phase measures the surface as it now looks. Effects therefore never
//! observe a window that has not been committed.
//!
//! # Edge cases
//!
//! Nothing here fails. An empty container, an unreachable navigation target
//! and a resize with nothing measurable all leave the previous state in place.

pub mod effects;
pub mod layout;
pub mod measure;
pub mod navigator;
pub mod notifier;
pub mod resize;
pub mod state;
pub mod strip;

use std::time::Duration;

use tracing::debug;

pub use effects::{Effect, EffectQueue};
pub use layout::{DEFAULT_CHROME_WIDTH, LayoutInput, compute_layout};
pub use measure::{ElementSelector, ItemMetrics, MeasurementProvider};
pub use navigator::Direction;
pub use notifier::{ActiveFlags, ActiveSink, notify_active_range};
pub use resize::{DEFAULT_RESIZE_DEBOUNCE, ResizePolicy, ResizeReactor, ResizeTicket};
pub use state::{PLACEHOLDER_PANE_WIDTH, ScrollState, Window};
pub use strip::StripMeasurements;

/// Options recognised by a scroller instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollerOptions {
    /// Selects the item elements inside the container.
    pub element_selector: ElementSelector,
    /// Space reserved for the navigation controls.
    pub chrome_width: f64,
    /// Quiet period after the last resize signal before relayout.
    pub resize_debounce: Duration,
    /// Start index reported before the first layout settles.
    pub initial_position: Option<usize>,
    /// Relayout behaviour after a resize.
    pub resize_policy: ResizePolicy,
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self {
            element_selector: ElementSelector::default(),
            chrome_width: DEFAULT_CHROME_WIDTH,
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
            initial_position: None,
            resize_policy: ResizePolicy::default(),
        }
    }
}

/// Result of handing a resize ticket back to the scroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// A newer signal superseded the ticket, or the scroller was disposed.
    Stale,
    /// The ticket settled but nothing was measurable; state is unchanged.
    Skipped {
        /// Raw signals coalesced into this settlement.
        coalesced: u64,
    },
    /// The ticket settled and a relayout was committed.
    Relayout {
        /// Raw signals coalesced into this settlement.
        coalesced: u64,
    },
}

impl ResizeOutcome {
    /// Returns true when a relayout was committed and effects are pending.
    #[must_use]
    pub const fn committed(&self) -> bool {
        matches!(self, Self::Relayout { .. })
    }
}

/// What one effect phase did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectReport {
    /// Active flags reported, summed over every committed window.
    pub notified: usize,
    /// Whether the scroll offset was re-anchored to the first active item.
    pub aligned: bool,
}

/// State and behaviour of one scroller widget instance.
#[derive(Debug, Clone)]
pub struct Scroller {
    options: ScrollerOptions,
    window: Option<Window>,
    scroll: ScrollState,
    effects: EffectQueue,
    resize: ResizeReactor,
    disposed: bool,
}

impl Scroller {
    /// Attaches a new scroller instance.
    ///
    /// No layout happens until [`Scroller::recalculate`] is called with a
    /// provider for the mounted surface.
    #[must_use]
    pub fn create(options: ScrollerOptions) -> Self {
        let resize = ResizeReactor::new(options.resize_debounce);
        Self {
            options,
            window: None,
            scroll: ScrollState::default(),
            effects: EffectQueue::default(),
            resize,
            disposed: false,
        }
    }

    /// Detaches the instance: pending effects and resize timers are dropped
    /// and every later call is a no-op.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.window = None;
        self.effects.clear();
        self.resize.dispose();
    }

    /// Returns true once [`Scroller::dispose`] has run.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Options the instance was created with.
    #[must_use]
    pub const fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    /// Current window, if a layout has been committed.
    #[must_use]
    pub const fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Current scroll state.
    #[must_use]
    pub const fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    /// Index of the first visible item.
    ///
    /// Before the first layout this is the configured initial position.
    #[must_use]
    pub fn start_at(&self) -> Option<usize> {
        self.window
            .map(|window| window.start_at())
            .or(self.options.initial_position)
    }

    /// Pane width to render, falling back to a placeholder before layout.
    #[must_use]
    pub fn pane_width(&self) -> f64 {
        self.window
            .map_or(PLACEHOLDER_PANE_WIDTH, |window| window.pane_width())
    }

    /// Returns true when `index` is inside the committed window.
    #[must_use]
    pub fn is_item_active(&self, index: usize) -> bool {
        self.window.is_some_and(|window| window.contains(index))
    }

    /// Returns true when a window starting at `index` would be in range.
    #[must_use]
    pub fn can_scroll_to(&self, index: usize) -> bool {
        self.window
            .is_some_and(|window| navigator::can_scroll_to(&window, index))
    }

    /// Returns true when committed state is waiting for its effect phase.
    #[must_use]
    pub fn has_pending_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Lays the window out from fresh measurements and re-centres it.
    ///
    /// Returns `false`, leaving state untouched, when nothing matches the
    /// element selector or the instance is disposed.
    pub fn recalculate<P>(&mut self, provider: &P) -> bool
    where
        P: MeasurementProvider + ?Sized,
    {
        self.relayout(provider, ResizePolicy::Recenter)
    }

    fn relayout<P>(&mut self, provider: &P, policy: ResizePolicy) -> bool
    where
        P: MeasurementProvider + ?Sized,
    {
        if self.disposed {
            return false;
        }

        let Some(input) =
            LayoutInput::measure(provider, &self.options.element_selector, self.options.chrome_width)
        else {
            debug!("no scroller items matched; keeping previous layout");
            return false;
        };
        let Some(centred) = compute_layout(&input) else {
            return false;
        };

        let window = match (policy, self.window) {
            (ResizePolicy::PreserveStart, Some(previous)) => {
                centred.with_start_clamped(previous.start_at())
            }
            _ => centred,
        };

        debug!(
            total_items = window.total_items(),
            active_count = window.active_count(),
            start_at = window.start_at(),
            pane_width = window.pane_width(),
            "committed scroller layout"
        );

        self.window = Some(window);
        self.scroll.initializing = false;
        self.effects.push(Effect::NotifyActive(window));
        self.effects.push(Effect::AlignFirstActive);
        true
    }

    /// Moves the window so it starts at `target`.
    ///
    /// Returns `false`, leaving state untouched, when the target is the
    /// current start, the moved window would not fit, or no layout exists.
    pub fn scroll_to<P>(&mut self, target: usize, provider: &P) -> bool
    where
        P: MeasurementProvider + ?Sized,
    {
        let Some(window) = self.window.filter(|_| !self.disposed) else {
            return false;
        };
        if !navigator::can_scroll_to(&window, target) || target == window.start_at() {
            return false;
        }

        let items = provider.items(&self.options.element_selector);
        self.commit_step(navigator::scroll_to(&window, &self.scroll, target, &items))
    }

    /// Moves the window one item in `direction`.
    pub fn scroll_by<P>(&mut self, direction: Direction, provider: &P) -> bool
    where
        P: MeasurementProvider + ?Sized,
    {
        let Some(target) = self
            .window
            .and_then(|window| window.start_at().checked_add_signed(direction.offset()))
        else {
            return false;
        };
        self.scroll_to(target, provider)
    }

    /// Moves the window one item towards the start.
    pub fn scroll_left<P>(&mut self, provider: &P) -> bool
    where
        P: MeasurementProvider + ?Sized,
    {
        self.scroll_by(Direction::Backward, provider)
    }

    /// Moves the window one item towards the end.
    pub fn scroll_right<P>(&mut self, provider: &P) -> bool
    where
        P: MeasurementProvider + ?Sized,
    {
        self.scroll_by(Direction::Forward, provider)
    }

    fn commit_step(&mut self, step: Option<(Window, ScrollState)>) -> bool {
        let Some((window, scroll)) = step else {
            return false;
        };
        debug!(
            start_at = window.start_at(),
            scroll_left = scroll.scroll_left,
            "scroller stepped"
        );
        self.window = Some(window);
        self.scroll = scroll;
        self.effects.push(Effect::NotifyActive(window));
        true
    }

    /// Records a raw viewport resize signal.
    ///
    /// The host should wait for [`ResizeTicket::delay`] (for example with
    /// [`ResizeTicket::elapsed`]) and then pass the ticket to
    /// [`Scroller::resize_elapsed`].
    pub const fn on_viewport_resize(&mut self) -> Option<ResizeTicket> {
        self.resize.signal()
    }

    /// Settles a resize ticket, relaying out if it is still the newest one.
    pub fn resize_elapsed<P>(&mut self, ticket: ResizeTicket, provider: &P) -> ResizeOutcome
    where
        P: MeasurementProvider + ?Sized,
    {
        let Some(coalesced) = self.resize.settle(ticket) else {
            return ResizeOutcome::Stale;
        };

        if self.relayout(provider, self.options.resize_policy) {
            debug!(coalesced, "relayout after viewport resize");
            ResizeOutcome::Relayout { coalesced }
        } else {
            ResizeOutcome::Skipped { coalesced }
        }
    }

    /// Runs every pending effect against the rendered surface.
    ///
    /// Each committed window is reported to `sink` in commit order, so two
    /// steps taken before this call produce two full passes. Alignment reads
    /// bounding positions from `provider`, so the committed state must
    /// already be rendered.
    pub fn run_effects<P, S>(&mut self, provider: &P, sink: &mut S) -> EffectReport
    where
        P: MeasurementProvider + ?Sized,
        S: ActiveSink + ?Sized,
    {
        let mut report = EffectReport::default();
        while let Some(effect) = self.effects.pop() {
            match effect {
                Effect::NotifyActive(committed) => {
                    let reported = notify_active_range(&committed, committed.total_items(), sink);
                    report.notified = report.notified.saturating_add(reported);
                }
                Effect::AlignFirstActive => {
                    let Some(window) = self.window else {
                        continue;
                    };
                    let items = provider.items(&self.options.element_selector);
                    if let Some(aligned) = navigator::align_to_first_active(
                        &window,
                        &self.scroll,
                        provider.pane_left(),
                        &items,
                    ) {
                        self.scroll = aligned;
                        report.aligned = true;
                    }
                }
            }
        }
        report
    }
}
