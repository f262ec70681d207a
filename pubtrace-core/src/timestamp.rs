// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Header timestamps with exact second/nanosecond ordering.
//!
//! A [`Timestamp`] is the key type of the retention store. Ordering compares
//! seconds first and nanoseconds second, and equality requires both components
//! to match, so the "strictly before the watermark" rule used by pruning is
//! never ambiguous.
//!
//! The canonical label `"<seconds>.<9-digit-nanoseconds>"` produced by
//! [`Display`](core::fmt::Display) is a presentation helper only; the store
//! indexes by the structured value.
//!
//! ```
//! use pubtrace_core::Timestamp;
//!
//! let t = Timestamp::new(30, 0).unwrap();
//! assert_eq!(t.to_string(), "30.000000000");
//! assert_eq!("30.000000000".parse::<Timestamp>().unwrap(), t);
//! ```

use core::fmt;
use core::str::FromStr;
use core::time::Duration;
use pubtrace_error::{PubtraceError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Nanoseconds in one second.
pub const NANOS_PER_SEC: u32 = 1_000_000_000;

const NANOS_PER_SEC_I128: i128 = NANOS_PER_SEC as i128;

/// A message header timestamp: integer seconds plus integer nanoseconds.
///
/// Invariant: `nanosec < NANOS_PER_SEC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    sec: i64,
    nanosec: u32,
}

impl Timestamp {
    /// The epoch, `0.000000000`.
    pub const ZERO: Self = Self { sec: 0, nanosec: 0 };

    /// Creates a timestamp from its two components.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `nanosec` is negative or not below one second.
    pub fn new(sec: i64, nanosec: i64) -> Result<Self> {
        if !(0..i64::from(NANOS_PER_SEC)).contains(&nanosec) {
            return Err(PubtraceError::invalid_argument(format!(
                "nanosec must be in [0, {NANOS_PER_SEC}), got {nanosec}"
            )));
        }
        Ok(Self {
            sec,
            nanosec: nanosec as u32,
        })
    }

    /// Creates a timestamp on a whole second.
    #[must_use]
    pub const fn from_secs(sec: i64) -> Self {
        Self { sec, nanosec: 0 }
    }

    /// Creates a timestamp from a signed nanosecond count since the epoch.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the seconds component does not fit in `i64`.
    pub fn from_nanos(nanos: i128) -> Result<Self> {
        let sec = i64::try_from(nanos.div_euclid(NANOS_PER_SEC_I128)).map_err(|_| {
            PubtraceError::invalid_argument(format!("{nanos} ns is out of timestamp range"))
        })?;
        Ok(Self {
            sec,
            nanosec: nanos.rem_euclid(NANOS_PER_SEC_I128) as u32,
        })
    }

    /// Converts a wall-clock time, including times before the epoch.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the time is out of timestamp range.
    pub fn from_system_time(time: SystemTime) -> Result<Self> {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self::from_nanos(duration_nanos(after)?),
            Err(before) => Self::from_nanos(-duration_nanos(before.duration())?),
        }
    }

    /// Seconds component.
    #[must_use]
    pub const fn sec(&self) -> i64 {
        self.sec
    }

    /// Nanoseconds component, always below [`NANOS_PER_SEC`].
    #[must_use]
    pub const fn nanosec(&self) -> u32 {
        self.nanosec
    }

    /// Total signed nanoseconds since the epoch.
    #[must_use]
    pub const fn as_nanos(&self) -> i128 {
        self.sec as i128 * NANOS_PER_SEC_I128 + self.nanosec as i128
    }

    /// `self + duration`, or `None` on overflow.
    #[must_use]
    pub fn checked_add_duration(&self, duration: Duration) -> Option<Self> {
        let nanos = self
            .as_nanos()
            .checked_add(i128::try_from(duration.as_nanos()).ok()?)?;
        Self::from_nanos(nanos).ok()
    }

    /// `self - duration`, or `None` on overflow.
    #[must_use]
    pub fn checked_sub_duration(&self, duration: Duration) -> Option<Self> {
        let nanos = self
            .as_nanos()
            .checked_sub(i128::try_from(duration.as_nanos()).ok()?)?;
        Self::from_nanos(nanos).ok()
    }

    /// Time elapsed from `earlier` to `self`, or `None` if `earlier` is later.
    #[must_use]
    pub fn duration_since(&self, earlier: Self) -> Option<Duration> {
        let diff = self.as_nanos() - earlier.as_nanos();
        if diff < 0 {
            return None;
        }
        let secs = u64::try_from(diff / NANOS_PER_SEC_I128).ok()?;
        Some(Duration::new(secs, (diff % NANOS_PER_SEC_I128) as u32))
    }
}

fn duration_nanos(duration: Duration) -> Result<i128> {
    i128::try_from(duration.as_nanos())
        .map_err(|_| PubtraceError::invalid_argument("duration is out of timestamp range"))
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.sec, self.nanosec)
    }
}

impl FromStr for Timestamp {
    type Err = PubtraceError;

    /// Parses `"<seconds>"` or `"<seconds>.<1 to 9 fractional digits>"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PubtraceError::invalid_argument(format!("malformed timestamp '{s}'"));

        let (sec_part, frac_part) = match s.split_once('.') {
            Some((sec, frac)) => (sec, Some(frac)),
            None => (s, None),
        };
        let sec = sec_part.parse::<i64>().map_err(|_| invalid())?;
        // Negative values print with floored seconds, so "-0.x" is never canonical.
        if sec == 0 && sec_part.starts_with('-') {
            return Err(invalid());
        }

        let nanosec = match frac_part {
            None => 0,
            Some(frac) => {
                if frac.is_empty() || frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let digits = frac.parse::<i64>().map_err(|_| invalid())?;
                digits * 10_i64.pow(9 - frac.len() as u32)
            }
        };

        Self::new(sec, nanosec)
    }
}

impl TryFrom<SystemTime> for Timestamp {
    type Error = PubtraceError;

    fn try_from(time: SystemTime) -> Result<Self> {
        Self::from_system_time(time)
    }
}
