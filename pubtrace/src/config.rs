// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Aggregator configuration and the debug-print context.
//!
//! The config carries only [`DebugSettings`]. Each
//! [`Aggregator`](crate::Aggregator) and [`Pruner`](crate::Pruner) builds its
//! own [`DebugContext`] from them. The retention store never sees either.

use crate::logging::{debug, info};
use core::time::Duration;
use pubtrace_core::Timestamp;

/// Default age after which records are pruned.
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(5);

/// Default period of the background pruner.
pub const DEFAULT_PRUNE_INTERVAL: Duration = Duration::from_secs(1);

/// Settings of one [`Aggregator`](crate::Aggregator).
///
/// ```
/// use pubtrace::AggregatorConfig;
/// use std::time::Duration;
///
/// let config = AggregatorConfig::default()
///     .with_path_name("planning_path")
///     .with_retention(Duration::from_secs(2));
///
/// assert_eq!(config.retention(), Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    path_name: String,
    retention: Duration,
    prune_interval: Duration,
    debug: DebugSettings,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            path_name: "default".to_string(),
            retention: DEFAULT_RETENTION,
            prune_interval: DEFAULT_PRUNE_INTERVAL,
            debug: DebugSettings::disabled(),
        }
    }
}

impl AggregatorConfig {
    /// Name of the message path this aggregator tracks, used in dumps and reports.
    #[must_use]
    pub fn with_path_name(mut self, path_name: impl Into<String>) -> Self {
        self.path_name = path_name.into();
        self
    }

    /// How far behind "now" the pruning watermark trails.
    #[must_use]
    pub fn with_retention(mut self, retention: Duration) -> Self {
        self.retention = retention;
        self
    }

    /// Tick period of the background pruner. Must be non-zero.
    #[must_use]
    pub fn with_prune_interval(mut self, prune_interval: Duration) -> Self {
        self.prune_interval = prune_interval;
        self
    }

    /// Debug switches the aggregator and pruner start with.
    #[must_use]
    pub fn with_debug(mut self, debug: DebugSettings) -> Self {
        self.debug = debug;
        self
    }

    pub fn path_name(&self) -> &str {
        &self.path_name
    }

    pub const fn retention(&self) -> Duration {
        self.retention
    }

    pub const fn prune_interval(&self) -> Duration {
        self.prune_interval
    }

    pub const fn debug(&self) -> DebugSettings {
        self.debug
    }

    /// Pruning watermark for `now`: `now - retention`.
    ///
    /// `None` when the subtraction leaves the timestamp range, in which case
    /// there is nothing old enough to prune.
    #[must_use]
    pub fn watermark(&self, now: Timestamp) -> Option<Timestamp> {
        now.checked_sub_duration(self.retention)
    }
}

/// Severity of a debug print. A print is emitted when its level is at or
/// above the context's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DebugLevel {
    #[default]
    Debug = 1,
    Info = 2,
}

/// Debug-print switches, as configured.
///
/// Plain values only; the print history lives in [`DebugContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DebugSettings {
    pub enabled: bool,
    pub threshold: DebugLevel,
    pub msg_dump: bool,
}

impl DebugSettings {
    /// Debug prints off, message dump off.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Debug prints on for `threshold` and above.
    #[must_use]
    pub fn enabled(threshold: DebugLevel) -> Self {
        Self {
            enabled: true,
            threshold,
            msg_dump: false,
        }
    }

    #[must_use]
    pub const fn with_msg_dump(mut self, msg_dump: bool) -> Self {
        self.msg_dump = msg_dump;
        self
    }
}

/// Debug-print switches plus the time of the previous print.
///
/// Each emitted print is prefixed with the time elapsed since the previous
/// one, e.g. `[0.250000000] added [topic1] ...`.
#[derive(Debug, Clone, Default)]
pub struct DebugContext {
    settings: DebugSettings,
    prev_print: Option<Timestamp>,
}

impl From<DebugSettings> for DebugContext {
    fn from(settings: DebugSettings) -> Self {
        Self::new(settings)
    }
}

impl DebugContext {
    /// A context that has not printed yet.
    #[must_use]
    pub const fn new(settings: DebugSettings) -> Self {
        Self {
            settings,
            prev_print: None,
        }
    }

    pub const fn settings(&self) -> DebugSettings {
        self.settings
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
    }

    pub fn set_threshold(&mut self, threshold: DebugLevel) {
        self.settings.threshold = threshold;
    }

    pub fn set_msg_dump(&mut self, msg_dump: bool) {
        self.settings.msg_dump = msg_dump;
    }

    pub const fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    pub const fn threshold(&self) -> DebugLevel {
        self.settings.threshold
    }

    pub const fn msg_dump_enabled(&self) -> bool {
        self.settings.msg_dump
    }

    /// Time of the last emitted print.
    pub const fn prev_print(&self) -> Option<Timestamp> {
        self.prev_print
    }

    /// Whether a print at `level` would be emitted.
    #[must_use]
    pub fn should_print(&self, level: DebugLevel) -> bool {
        self.settings.enabled && level >= self.settings.threshold
    }

    /// `[<seconds>.<nanos>]` since the previous print, then remembers `now`.
    ///
    /// The first print measures from the epoch. A clock that stepped
    /// backwards yields zero.
    pub fn elapsed_label(&mut self, now: Timestamp) -> String {
        let since = self.prev_print.unwrap_or(Timestamp::ZERO);
        let elapsed = now.duration_since(since).unwrap_or_default();
        self.prev_print = Some(now);
        format!("[{}.{:09}]", elapsed.as_secs(), elapsed.subsec_nanos())
    }

    /// Emits `message` at `level` if the context allows it.
    ///
    /// Returns whether anything was emitted.
    pub fn print(&mut self, level: DebugLevel, now: Timestamp, message: &str) -> bool {
        if !self.should_print(level) {
            return false;
        }
        let label = self.elapsed_label(now);
        match level {
            DebugLevel::Debug => debug!("{} {}", label, message),
            DebugLevel::Info => info!("{} {}", label, message),
        }
        true
    }
}
