// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::helpers::{pub_info, time_msg};
use pubtrace_core::{PubInfo, PubInfos};

pub const TOPIC1: &str = "topic1";
pub const TOPIC2: &str = "topic2";

/// topic1 published at 10.000, input 8.000, observed 9.000.
pub fn topic1_at_10() -> PubInfo {
    pub_info(TOPIC1, time_msg(8, 0), time_msg(9, 0), time_msg(10, 0))
}

/// topic2 published at 20.000, input 18.000, observed 19.000.
pub fn topic2_at_20() -> PubInfo {
    pub_info(TOPIC2, time_msg(18, 0), time_msg(19, 0), time_msg(20, 0))
}

/// topic1 published at 30.000, input 28.000, observed 29.000.
pub fn topic1_at_30() -> PubInfo {
    pub_info(TOPIC1, time_msg(28, 0), time_msg(29, 0), time_msg(30, 0))
}

/// The three-record store: topic1@10, topic2@20, topic1@30, added in that order.
pub fn scenario_pub_infos() -> PubInfos {
    let mut infos = PubInfos::new();
    infos.add(topic1_at_10());
    infos.add(topic2_at_20());
    infos.add(topic1_at_30());
    infos
}
