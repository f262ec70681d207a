// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types of the pubtrace latency aggregator.
//!
//! - [`Timestamp`] - header stamp with exact total order
//! - [`PubInfo`] - one observed publish event
//! - [`PubInfos`] - per-topic retention store with watermark pruning
//! - [`SharedPubInfos`] - the store behind a single lock
//!
//! Nothing in this crate reads a clock or logs; watermarks are always passed in.
pub mod has_timestamp;
pub mod pub_info;
pub mod pub_infos;
pub mod shared_pub_infos;
pub mod timestamp;

pub use self::has_timestamp::HasTimestamp;
pub use self::pub_info::{PubInfo, PubInfoBuilder};
pub use self::pub_infos::{PubInfos, TopicRecords};
pub use self::shared_pub_infos::SharedPubInfos;
pub use self::timestamp::{Timestamp, NANOS_PER_SEC};
pub use pubtrace_error::{PubtraceError, Result, ResultExt};
