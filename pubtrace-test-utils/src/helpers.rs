// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pubtrace_core::{PubInfo, Timestamp};

/// Timestamp of `sec` seconds plus `ms` milliseconds.
pub fn time_msg(sec: i64, ms: i64) -> Timestamp {
    ts(sec, ms * 1_000_000)
}

/// Timestamp from raw components; panics on an out-of-range `nanosec`.
pub fn ts(sec: i64, nanosec: i64) -> Timestamp {
    Timestamp::new(sec, nanosec).expect("valid test timestamp")
}

pub fn pub_info(
    topic: &str,
    input_time: Timestamp,
    subscribe_time: Timestamp,
    output_time: Timestamp,
) -> PubInfo {
    PubInfo::new(topic, input_time, subscribe_time, output_time).expect("valid test record")
}
