// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A trait for values that carry the timestamp they are ordered by.
///
/// The retention store keys every record by this value, and pruning compares
/// it against the watermark.
///
/// # Examples
///
/// ```
/// use pubtrace_core::{HasTimestamp, Timestamp};
///
/// #[derive(Clone, Debug)]
/// struct Heartbeat {
///     node: String,
///     stamp: Timestamp,
/// }
///
/// impl HasTimestamp for Heartbeat {
///     type Timestamp = Timestamp;
///
///     fn timestamp(&self) -> Timestamp {
///         self.stamp
///     }
/// }
///
/// let beat = Heartbeat { node: "planner".into(), stamp: Timestamp::from_secs(3) };
/// assert_eq!(beat.timestamp(), Timestamp::from_secs(3));
/// ```
pub trait HasTimestamp {
    /// The type representing the timestamp
    type Timestamp: Ord + Copy + Send + Sync + std::fmt::Debug;

    /// Returns the timestamp value for this item.
    fn timestamp(&self) -> Self::Timestamp;
}
