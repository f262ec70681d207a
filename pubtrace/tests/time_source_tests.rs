// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pubtrace::{ManualTimeSource, SystemTimeSource, TimeSource};
use pubtrace_core::Timestamp;
use pubtrace_test_utils::time_msg;
use std::time::Duration;

#[test]
fn test_system_time_is_after_epoch() {
    assert!(SystemTimeSource.now() > Timestamp::ZERO);
}

#[test]
fn test_manual_clock_set_and_advance() {
    let clock = ManualTimeSource::new(time_msg(10, 0));

    clock.advance(Duration::from_millis(250));
    assert_eq!(clock.now(), time_msg(10, 250));

    clock.set(time_msg(3, 0));
    assert_eq!(clock.now(), time_msg(3, 0));
}

#[test]
fn test_manual_clock_clones_share_time() {
    let clock = ManualTimeSource::default();
    let other = clock.clone();

    other.advance(Duration::from_secs(7));

    assert_eq!(clock.now(), time_msg(7, 0));
}

#[test]
fn test_manual_clock_ignores_overflowing_advance() {
    let clock = ManualTimeSource::new(time_msg(10, 0));

    clock.advance(Duration::MAX);

    assert_eq!(clock.now(), time_msg(10, 0));
}
