// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pubtrace_core::SharedPubInfos;
use pubtrace_test_utils::test_data::{TOPIC1, TOPIC2};
use pubtrace_test_utils::{pub_info, scenario_pub_infos, time_msg};
use std::thread;

#[test]
fn test_clones_share_state() {
    let store = SharedPubInfos::from(scenario_pub_infos());
    let other = store.clone();

    other.erase_until(time_msg(10, 1));

    assert_eq!(store.count_for(TOPIC1), 1);
    assert_eq!(store.count_for(TOPIC2), 1);
}

#[test]
fn test_topics_are_sorted() {
    let store = SharedPubInfos::new();
    store.add(pub_info("zeta", time_msg(0, 0), time_msg(0, 0), time_msg(1, 0)));
    store.add(pub_info("alpha", time_msg(0, 0), time_msg(0, 0), time_msg(1, 0)));

    assert_eq!(store.topics(), vec!["alpha".to_string(), "zeta".to_string()]);
}

#[test]
fn test_snapshot_is_detached() {
    let store = SharedPubInfos::from(scenario_pub_infos());
    let snapshot = store.snapshot();

    store.erase_until(time_msg(100, 0));

    assert_eq!(snapshot.total_records(), 3);
    assert_eq!(store.total_records(), 0);
    assert!(store.contains_topic(TOPIC1));
}

#[test]
fn test_records_for_returns_owned_ordered_copies() {
    let store = SharedPubInfos::from(scenario_pub_infos());

    let records = store.records_for(TOPIC1);

    let outputs: Vec<String> = records.iter().map(|r| r.output_time().to_string()).collect();
    assert_eq!(outputs, vec!["10.000000000", "30.000000000"]);
    assert!(store.records_for("unknown").is_empty());
}

#[test]
fn test_concurrent_writers_and_pruner() {
    let store = SharedPubInfos::new();
    let writers: Vec<_> = (0..4)
        .map(|w| {
            let store = store.clone();
            thread::spawn(move || {
                for n in 0..250 {
                    let topic = format!("writer{w}");
                    store.add(pub_info(&topic, time_msg(0, 0), time_msg(0, 0), time_msg(n, 0)));
                }
            })
        })
        .collect();

    let pruner = {
        let store = store.clone();
        thread::spawn(move || {
            for _ in 0..100 {
                store.erase_until(time_msg(100, 0));
            }
        })
    };

    for writer in writers {
        writer.join().unwrap();
    }
    pruner.join().unwrap();
    store.erase_until(time_msg(100, 0));

    assert_eq!(store.topics().len(), 4);
    for w in 0..4 {
        let topic = format!("writer{w}");
        assert_eq!(store.count_for(&topic), 150);
        let first = store.with(|infos| infos.records_for(&topic).next().map(|r| r.output_time()));
        assert_eq!(first, Some(time_msg(100, 0)));
    }
}
