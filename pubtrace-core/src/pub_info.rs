// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{HasTimestamp, Timestamp};
use core::fmt;
use core::time::Duration;
use pubtrace_error::{PubtraceError, Result};

/// One observed publish event on one topic.
///
/// Holds the header stamp of the triggering input, the time that input was
/// observed by the subscriber, and the header stamp of the published output.
/// The output stamp is the record's key within its topic's history.
///
/// Immutable once built.
///
/// ```
/// use pubtrace_core::{PubInfo, Timestamp};
/// use std::time::Duration;
///
/// let info = PubInfo::new(
///     "/sensing/points",
///     Timestamp::from_secs(8),
///     Timestamp::from_secs(9),
///     Timestamp::from_secs(10),
/// )
/// .unwrap();
///
/// assert_eq!(info.latency(), Some(Duration::from_secs(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PubInfo {
    topic: String,
    input_time: Timestamp,
    subscribe_time: Timestamp,
    output_time: Timestamp,
}

impl PubInfo {
    /// Creates a record from all four required fields.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `topic` is empty.
    pub fn new(
        topic: impl Into<String>,
        input_time: Timestamp,
        subscribe_time: Timestamp,
        output_time: Timestamp,
    ) -> Result<Self> {
        let topic = topic.into();
        if topic.is_empty() {
            return Err(PubtraceError::invalid_argument("topic must not be empty"));
        }
        Ok(Self {
            topic,
            input_time,
            subscribe_time,
            output_time,
        })
    }

    /// Starts a record whose timestamps are supplied one by one.
    ///
    /// Useful when the timestamps come from optional message fields; a field
    /// that was never set is reported by [`PubInfoBuilder::build`].
    pub fn builder(topic: impl Into<String>) -> PubInfoBuilder {
        PubInfoBuilder {
            topic: topic.into(),
            input_time: None,
            subscribe_time: None,
            output_time: None,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub const fn input_time(&self) -> Timestamp {
        self.input_time
    }

    pub const fn subscribe_time(&self) -> Timestamp {
        self.subscribe_time
    }

    pub const fn output_time(&self) -> Timestamp {
        self.output_time
    }

    /// End-to-end latency from the input header stamp to the output header stamp.
    ///
    /// `None` if the output is stamped before its input.
    #[must_use]
    pub fn latency(&self) -> Option<Duration> {
        self.output_time.duration_since(self.input_time)
    }

    /// Time spent between observing the input and stamping the output.
    #[must_use]
    pub fn processing_time(&self) -> Option<Duration> {
        self.output_time.duration_since(self.subscribe_time)
    }
}

impl HasTimestamp for PubInfo {
    type Timestamp = Timestamp;

    fn timestamp(&self) -> Timestamp {
        self.output_time
    }
}

impl fmt::Display for PubInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] in={} sub={} out={}",
            self.topic, self.input_time, self.subscribe_time, self.output_time
        )
    }
}

/// Incremental constructor for [`PubInfo`].
#[derive(Debug, Clone)]
#[must_use]
pub struct PubInfoBuilder {
    topic: String,
    input_time: Option<Timestamp>,
    subscribe_time: Option<Timestamp>,
    output_time: Option<Timestamp>,
}

impl PubInfoBuilder {
    pub fn input_time(mut self, stamp: impl Into<Option<Timestamp>>) -> Self {
        self.input_time = stamp.into();
        self
    }

    pub fn subscribe_time(mut self, stamp: impl Into<Option<Timestamp>>) -> Self {
        self.subscribe_time = stamp.into();
        self
    }

    pub fn output_time(mut self, stamp: impl Into<Option<Timestamp>>) -> Self {
        self.output_time = stamp.into();
        self
    }

    /// Builds the record.
    ///
    /// # Errors
    /// Returns `InvalidArgument` naming the first missing timestamp, or if the
    /// topic is empty.
    pub fn build(self) -> Result<PubInfo> {
        let missing = |field: &str| {
            PubtraceError::invalid_argument(format!("{field} missing for topic '{}'", self.topic))
        };
        let input_time = self.input_time.ok_or_else(|| missing("input_time"))?;
        let subscribe_time = self.subscribe_time.ok_or_else(|| missing("subscribe_time"))?;
        let output_time = self.output_time.ok_or_else(|| missing("output_time"))?;

        PubInfo::new(self.topic, input_time, subscribe_time, output_time)
    }
}
