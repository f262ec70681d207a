// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pubtrace_core::{PubtraceError, Timestamp, NANOS_PER_SEC};
use pubtrace_test_utils::{time_msg, ts};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[test]
fn test_new_rejects_negative_nanosec() {
    let err = Timestamp::new(10, -1).unwrap_err();
    assert!(matches!(err, PubtraceError::InvalidArgument { .. }));
}

#[test]
fn test_new_rejects_full_second_of_nanos() {
    assert!(Timestamp::new(10, i64::from(NANOS_PER_SEC)).is_err());
    assert!(Timestamp::new(10, i64::from(NANOS_PER_SEC) - 1).is_ok());
}

#[test]
fn test_ordering_compares_seconds_then_nanos() {
    assert!(ts(10, 0) < ts(10, 1));
    assert!(ts(10, 999_999_999) < ts(11, 0));
    assert!(ts(-1, 999_999_999) < Timestamp::ZERO);
}

#[test]
fn test_equality_requires_both_components() {
    assert_eq!(ts(10, 5), ts(10, 5));
    assert_ne!(ts(10, 5), ts(10, 6));
    assert_ne!(ts(10, 5), ts(11, 5));
}

#[test]
fn test_display_pads_nanos_to_nine_digits() {
    assert_eq!(time_msg(30, 0).to_string(), "30.000000000");
    assert_eq!(ts(10, 1).to_string(), "10.000000001");
    assert_eq!(time_msg(9, 999).to_string(), "9.999000000");
}

#[test]
fn test_parse_canonical_label() -> anyhow::Result<()> {
    assert_eq!("30.000000000".parse::<Timestamp>()?, time_msg(30, 0));
    assert_eq!("10.000000001".parse::<Timestamp>()?, ts(10, 1));
    Ok(())
}

#[test]
fn test_parse_short_fraction_and_whole_seconds() -> anyhow::Result<()> {
    assert_eq!("9.999".parse::<Timestamp>()?, time_msg(9, 999));
    assert_eq!("42".parse::<Timestamp>()?, Timestamp::from_secs(42));
    Ok(())
}

#[test]
fn test_parse_rejects_malformed_labels() {
    for label in ["", "abc", "1.", "1.0000000001", "1.-5", "1.2x", ".5", "-0.5", "-0"] {
        let err = label.parse::<Timestamp>().unwrap_err();
        assert!(
            matches!(err, PubtraceError::InvalidArgument { .. }),
            "label {label:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_negative_label_keeps_sign() -> anyhow::Result<()> {
    let half_before_epoch = Timestamp::from_nanos(-500_000_000)?;

    assert_eq!(half_before_epoch.to_string(), "-1.500000000");
    assert_eq!("-1.500000000".parse::<Timestamp>()?, half_before_epoch);
    assert_ne!("0.500000000".parse::<Timestamp>()?, half_before_epoch);
    Ok(())
}

#[test]
fn test_from_nanos_handles_negative_values() -> anyhow::Result<()> {
    let t = Timestamp::from_nanos(-1)?;
    assert_eq!(t.sec(), -1);
    assert_eq!(t.nanosec(), NANOS_PER_SEC - 1);
    assert_eq!(t.as_nanos(), -1);
    Ok(())
}

#[test]
fn test_from_nanos_rejects_out_of_range() {
    assert!(Timestamp::from_nanos(i128::MAX).is_err());
}

#[test]
fn test_checked_sub_duration_borrows_from_seconds() {
    let t = ts(10, 1_000);
    assert_eq!(
        t.checked_sub_duration(Duration::from_micros(2)),
        Some(ts(9, 999_999_000))
    );
}

#[test]
fn test_checked_add_duration() {
    assert_eq!(
        ts(9, 999_999_999).checked_add_duration(Duration::from_nanos(1)),
        Some(ts(10, 0))
    );
}

#[test]
fn test_checked_duration_arithmetic_overflow() {
    let max = Timestamp::from_nanos(i128::from(i64::MAX) * i128::from(NANOS_PER_SEC)).unwrap();
    assert_eq!(max.checked_add_duration(Duration::from_secs(1)), None);
}

#[test]
fn test_duration_since() {
    assert_eq!(
        time_msg(10, 500).duration_since(time_msg(8, 0)),
        Some(Duration::from_millis(2_500))
    );
    assert_eq!(time_msg(8, 0).duration_since(time_msg(10, 0)), None);
    assert_eq!(ts(5, 0).duration_since(ts(5, 0)), Some(Duration::ZERO));
}

#[test]
fn test_from_system_time() -> anyhow::Result<()> {
    let after = UNIX_EPOCH + Duration::new(1_700_000_000, 42);
    assert_eq!(Timestamp::try_from(after)?, ts(1_700_000_000, 42));

    let before = UNIX_EPOCH - Duration::from_millis(500);
    assert_eq!(Timestamp::from_system_time(before)?, ts(-1, 500_000_000));

    assert!(Timestamp::from_system_time(SystemTime::now())? > Timestamp::ZERO);
    Ok(())
}
