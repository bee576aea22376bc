//! Application telemetry events and sinks.
//!
//! The scroller runs entirely locally, but structured events about layout and
//! resize behaviour are still useful when debugging a host. Nothing is
//! transmitted anywhere.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by the scroller host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records a layout that completed its effect phase.
    LayoutSettled {
        /// Number of items measured.
        total_items: usize,
        /// Number of items visible at once.
        active_count: usize,
        /// Index of the first visible item.
        start_at: usize,
    },
    /// Records how many raw resize signals were coalesced into one relayout.
    ResizeCoalesced {
        /// Raw signals received since the previous settlement.
        signals: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Stderr stays clear of the alternate screen the terminal host draws on.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Test helpers for asserting on recorded telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Removes and returns the events recorded so far.
        #[must_use]
        #[expect(clippy::expect_used, reason = "mutex poisoning is a test failure")]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .expect("events mutex should be available")
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        #[expect(clippy::expect_used, reason = "mutex poisoning is a test failure")]
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .expect("events mutex should be available")
                .push(event);
        }
    }
}
