// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Injected clocks.
//!
//! Only the background pruner reads a clock, and it reads it through
//! [`TimeSource`]. Everything else takes `now` as an argument.

use core::fmt::Debug;
use core::time::Duration;
use parking_lot::Mutex;
use pubtrace_core::Timestamp;
use std::sync::Arc;
use std::time::SystemTime;

pub trait TimeSource: Clone + Send + Sync + Debug + 'static {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time since the Unix epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        // Only unrepresentable times fail; those are clamped to the epoch.
        Timestamp::from_system_time(SystemTime::now()).unwrap_or(Timestamp::ZERO)
    }
}

/// A clock that only moves when told to, for replaying recorded traffic or tests.
///
/// Clones share the same time.
///
/// ```
/// use pubtrace::{ManualTimeSource, TimeSource};
/// use pubtrace_core::Timestamp;
/// use std::time::Duration;
///
/// let clock = ManualTimeSource::new(Timestamp::from_secs(10));
/// clock.advance(Duration::from_millis(1_500));
/// assert_eq!(clock.now().to_string(), "11.500000000");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualTimeSource {
    now: Arc<Mutex<Timestamp>>,
}

impl ManualTimeSource {
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, now: Timestamp) {
        *self.now.lock() = now;
    }

    /// Moves the clock forward. An advance past the timestamp range is ignored.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        if let Some(next) = now.checked_add_duration(by) {
            *now = next;
        }
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        *self.now.lock()
    }
}
