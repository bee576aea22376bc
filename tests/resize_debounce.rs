//! Integration tests for debounced resize handling on the tokio clock.

#![expect(clippy::expect_used, reason = "Test setup invariants")]

use std::time::Duration;

use rstest::{fixture, rstest};
use scroller::viewport::{ActiveFlags, ResizeOutcome};
use scroller::{Scroller, ScrollerOptions, StripMeasurements, Window};
use tokio::time::Instant;

struct Mounted {
    scroller: Scroller,
    strip: StripMeasurements,
    flags: ActiveFlags,
}

impl Mounted {
    fn render(&mut self) {
        self.strip
            .render(self.scroller.pane_width(), self.scroller.scroll_state());
    }

    fn settle(&mut self) {
        self.render();
        self.scroller.run_effects(&self.strip, &mut self.flags);
        self.render();
    }
}

#[fixture]
fn mounted() -> Mounted {
    let mut mounted = Mounted {
        scroller: Scroller::create(ScrollerOptions::default()),
        strip: StripMeasurements::new(1000.0, 20.0).with_items(10, 200.0),
        flags: ActiveFlags::default(),
    };
    assert!(mounted.scroller.recalculate(&mounted.strip));
    mounted.settle();
    mounted
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn burst_relayouts_once_after_the_quiet_period(mut mounted: Mounted) {
    let started = Instant::now();
    let mut timers = Vec::new();

    for width in [900.0, 700.0, 500.0] {
        mounted.strip.set_container_width(width);
        let ticket = mounted
            .scroller
            .on_viewport_resize()
            .expect("live scroller issues tickets");
        timers.push(tokio::spawn(ticket.elapsed()));
        tokio::time::advance(Duration::from_millis(100)).await;
    }

    let mut outcomes = Vec::new();
    for timer in timers {
        let ticket = timer.await.expect("timer task should finish");
        outcomes.push(mounted.scroller.resize_elapsed(ticket, &mounted.strip));
    }

    assert_eq!(
        outcomes,
        vec![
            ResizeOutcome::Stale,
            ResizeOutcome::Stale,
            ResizeOutcome::Relayout { coalesced: 3 },
        ]
    );
    assert!(
        started.elapsed() >= Duration::from_millis(600),
        "relayout must wait 400 ms after the last signal"
    );

    mounted.settle();
    let window = mounted.scroller.window().copied().expect("window");
    assert_eq!(window.active_count(), 2);
    assert_eq!(window.start_at(), 4);
    assert_eq!(mounted.flags.active_indices(), vec![4, 5]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn separate_bursts_each_relayout(mut mounted: Mounted) {
    for width in [800.0, 1200.0] {
        mounted.strip.set_container_width(width);
        let ticket = mounted.scroller.on_viewport_resize().expect("ticket");
        let elapsed = ticket.elapsed().await;

        assert_eq!(
            mounted.scroller.resize_elapsed(elapsed, &mounted.strip),
            ResizeOutcome::Relayout { coalesced: 1 }
        );
        mounted.settle();
    }

    // (1200 - 60 + 20) / 220 fits five items.
    assert_eq!(
        mounted.scroller.window().map(Window::active_count),
        Some(5)
    );
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn disposal_during_the_debounce_drops_the_relayout(mut mounted: Mounted) {
    mounted.strip.set_container_width(400.0);
    let ticket = mounted.scroller.on_viewport_resize().expect("ticket");
    let timer = tokio::spawn(ticket.elapsed());

    mounted.scroller.dispose();
    let elapsed = timer.await.expect("timer task should finish");

    assert_eq!(
        mounted.scroller.resize_elapsed(elapsed, &mounted.strip),
        ResizeOutcome::Stale
    );
    assert_eq!(mounted.scroller.window(), None);
}
