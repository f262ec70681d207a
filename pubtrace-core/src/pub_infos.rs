// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-topic retention store for publish records.
//!
//! [`PubInfos`] maps every topic it has seen to the records of that topic that
//! have not been pruned yet, ordered by output header stamp.
//!
//! ## Characteristics
//!
//! - **Keyed by output stamp**: adding a record whose output stamp is already
//!   present for that topic replaces the stored record (last write wins).
//! - **Caller-driven retention**: records leave the store only through
//!   [`PubInfos::erase_until`]. There is no capacity bound.
//! - **Sticky topics**: a topic stays known after all its records are pruned,
//!   so "seen but currently empty" differs from "never seen".
//! - **Single writer**: wrap in [`SharedPubInfos`](crate::SharedPubInfos) to
//!   share between threads.
//!
//! ## Example
//!
//! ```
//! use pubtrace_core::{PubInfo, PubInfos, Timestamp};
//!
//! let ts = |s| Timestamp::from_secs(s);
//! let mut infos = PubInfos::new();
//! infos.add(PubInfo::new("topic1", ts(8), ts(9), ts(10)).unwrap());
//! infos.add(PubInfo::new("topic2", ts(18), ts(19), ts(20)).unwrap());
//!
//! // The boundary record is kept.
//! infos.erase_until(ts(10));
//! assert_eq!(infos.count_for("topic1"), 1);
//!
//! infos.erase_until(ts(21));
//! assert_eq!(infos.count_for("topic2"), 0);
//! assert!(infos.contains_topic("topic2"));
//! ```

use crate::{HasTimestamp, PubInfo, Timestamp};
use std::collections::{BTreeMap, HashMap};

/// Records of one topic, ordered by output stamp.
pub type TopicRecords = BTreeMap<Timestamp, PubInfo>;

/// The retention store: topic name to its unpruned records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PubInfos {
    topic_vs_pubinfos: HashMap<String, TopicRecords>,
}

impl PubInfos {
    /// Creates an empty store with no known topics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `info` under its topic, keyed by its output stamp.
    ///
    /// Creates the topic on first use. Returns the record that was replaced
    /// when the topic already held one with the same output stamp.
    pub fn add(&mut self, info: PubInfo) -> Option<PubInfo> {
        let key = info.timestamp();
        if let Some(records) = self.topic_vs_pubinfos.get_mut(info.topic()) {
            return records.insert(key, info);
        }

        let topic = info.topic().to_owned();
        let mut records = TopicRecords::new();
        records.insert(key, info);
        self.topic_vs_pubinfos.insert(topic, records);
        None
    }

    /// Removes, from every topic, each record stamped strictly before `watermark`.
    ///
    /// A record stamped exactly at `watermark` is kept. Topics left without
    /// records stay known. Returns the number of records removed.
    pub fn erase_until(&mut self, watermark: Timestamp) -> usize {
        let mut removed = 0;
        for records in self.topic_vs_pubinfos.values_mut() {
            // Records are ordered, so the prunable ones form a prefix.
            while let Some(oldest) = records.first_entry() {
                if *oldest.key() >= watermark {
                    break;
                }
                oldest.remove();
                removed += 1;
            }
        }
        removed
    }

    /// Every topic ever added, in no particular order.
    pub fn topics(&self) -> impl Iterator<Item = &str> + '_ {
        self.topic_vs_pubinfos.keys().map(String::as_str)
    }

    /// Records of `topic` in ascending output stamp order.
    ///
    /// Empty for an unknown topic as well as for a fully pruned one.
    pub fn records_for<'a>(
        &'a self,
        topic: &str,
    ) -> impl DoubleEndedIterator<Item = &'a PubInfo> + 'a {
        self.topic_vs_pubinfos
            .get(topic)
            .into_iter()
            .flat_map(TopicRecords::values)
    }

    /// Number of retained records of `topic`; zero when unknown or exhausted.
    #[must_use]
    pub fn count_for(&self, topic: &str) -> usize {
        self.topic_vs_pubinfos.get(topic).map_or(0, TopicRecords::len)
    }

    /// Whether `topic` was ever added, regardless of pruning.
    #[must_use]
    pub fn contains_topic(&self, topic: &str) -> bool {
        self.topic_vs_pubinfos.contains_key(topic)
    }

    /// The record of `topic` stamped exactly `output_time`, if retained.
    #[must_use]
    pub fn get(&self, topic: &str, output_time: Timestamp) -> Option<&PubInfo> {
        self.topic_vs_pubinfos.get(topic)?.get(&output_time)
    }

    /// Number of known topics, including emptied ones.
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topic_vs_pubinfos.len()
    }

    /// Number of retained records across all topics.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.topic_vs_pubinfos.values().map(TopicRecords::len).sum()
    }

    /// `true` until the first record is added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topic_vs_pubinfos.is_empty()
    }
}

impl Extend<PubInfo> for PubInfos {
    fn extend<I: IntoIterator<Item = PubInfo>>(&mut self, iter: I) {
        for info in iter {
            self.add(info);
        }
    }
}

impl FromIterator<PubInfo> for PubInfos {
    fn from_iter<I: IntoIterator<Item = PubInfo>>(iter: I) -> Self {
        let mut infos = Self::new();
        infos.extend(iter);
        infos
    }
}
