// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pubtrace_core::{HasTimestamp, PubInfo, PubtraceError};
use pubtrace_test_utils::{pub_info, time_msg};
use std::time::Duration;

#[test]
fn test_new_keeps_all_fields() {
    let info = pub_info("topic1", time_msg(8, 0), time_msg(9, 0), time_msg(10, 0));

    assert_eq!(info.topic(), "topic1");
    assert_eq!(info.input_time(), time_msg(8, 0));
    assert_eq!(info.subscribe_time(), time_msg(9, 0));
    assert_eq!(info.output_time(), time_msg(10, 0));
}

#[test]
fn test_new_rejects_empty_topic() {
    let err = PubInfo::new("", time_msg(8, 0), time_msg(9, 0), time_msg(10, 0)).unwrap_err();
    assert!(matches!(err, PubtraceError::InvalidArgument { .. }));
}

#[test]
fn test_timestamp_is_output_time() {
    let info = pub_info("topic1", time_msg(8, 0), time_msg(9, 0), time_msg(10, 0));
    assert_eq!(info.timestamp(), info.output_time());
}

#[test]
fn test_latency_and_processing_time() {
    let info = pub_info("topic1", time_msg(8, 0), time_msg(9, 250), time_msg(10, 0));

    assert_eq!(info.latency(), Some(Duration::from_secs(2)));
    assert_eq!(info.processing_time(), Some(Duration::from_millis(750)));
}

#[test]
fn test_latency_is_none_when_output_predates_input() {
    let info = pub_info("topic1", time_msg(10, 0), time_msg(10, 0), time_msg(9, 0));
    assert_eq!(info.latency(), None);
}

#[test]
fn test_builder_with_all_fields() -> anyhow::Result<()> {
    let built = PubInfo::builder("topic1")
        .input_time(time_msg(8, 0))
        .subscribe_time(time_msg(9, 0))
        .output_time(time_msg(10, 0))
        .build()?;

    assert_eq!(
        built,
        pub_info("topic1", time_msg(8, 0), time_msg(9, 0), time_msg(10, 0))
    );
    Ok(())
}

#[test]
fn test_builder_reports_missing_timestamp() {
    let err = PubInfo::builder("topic1")
        .input_time(time_msg(8, 0))
        .output_time(time_msg(10, 0))
        .build()
        .unwrap_err();

    assert!(matches!(err, PubtraceError::InvalidArgument { .. }));
    assert!(err.to_string().contains("subscribe_time"));
    assert!(err.to_string().contains("topic1"));
}

#[test]
fn test_builder_accepts_optional_stamps() {
    let err = PubInfo::builder("topic1")
        .input_time(Some(time_msg(8, 0)))
        .subscribe_time(Some(time_msg(9, 0)))
        .output_time(None)
        .build()
        .unwrap_err();

    assert!(err.to_string().contains("output_time"));
}

#[test]
fn test_display() {
    let info = pub_info("topic1", time_msg(8, 0), time_msg(9, 0), time_msg(10, 0));
    assert_eq!(
        info.to_string(),
        "[topic1] in=8.000000000 sub=9.000000000 out=10.000000000"
    );
}
