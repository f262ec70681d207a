// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Thread-safe handle to a [`PubInfos`] store.
//!
//! One `parking_lot::Mutex` guards the outer topic map and every inner record
//! map together, so `add`, `erase_until` and reads never observe a topic
//! mid-prune. Handles are cheap to clone; all clones share the same store.
//!
//! ```
//! use pubtrace_core::{PubInfo, SharedPubInfos, Timestamp};
//!
//! let store = SharedPubInfos::new();
//! let writer = store.clone();
//!
//! std::thread::spawn(move || {
//!     let ts = Timestamp::from_secs;
//!     writer.add(PubInfo::new("topic1", ts(1), ts(2), ts(3)).unwrap());
//! })
//! .join()
//! .unwrap();
//!
//! assert_eq!(store.count_for("topic1"), 1);
//! ```

use crate::{PubInfo, PubInfos, Timestamp};
use parking_lot::Mutex;
use std::sync::Arc;

/// A cloneable, lock-guarded [`PubInfos`].
#[derive(Debug, Clone, Default)]
pub struct SharedPubInfos {
    inner: Arc<Mutex<PubInfos>>,
}

impl SharedPubInfos {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`PubInfos::add`].
    pub fn add(&self, info: PubInfo) -> Option<PubInfo> {
        self.inner.lock().add(info)
    }

    /// See [`PubInfos::erase_until`].
    pub fn erase_until(&self, watermark: Timestamp) -> usize {
        self.inner.lock().erase_until(watermark)
    }

    /// Runs `f` against the store while holding the lock.
    ///
    /// Keep `f` short; writers wait for it.
    pub fn with<R>(&self, f: impl FnOnce(&PubInfos) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Owned copy of the current store contents.
    #[must_use]
    pub fn snapshot(&self) -> PubInfos {
        self.inner.lock().clone()
    }

    /// Known topics, sorted by name.
    #[must_use]
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self.with(|infos| infos.topics().map(str::to_owned).collect());
        topics.sort_unstable();
        topics
    }

    /// Owned copies of the records of `topic`, ascending by output stamp.
    #[must_use]
    pub fn records_for(&self, topic: &str) -> Vec<PubInfo> {
        self.with(|infos| infos.records_for(topic).cloned().collect())
    }

    /// See [`PubInfos::count_for`].
    #[must_use]
    pub fn count_for(&self, topic: &str) -> usize {
        self.with(|infos| infos.count_for(topic))
    }

    /// See [`PubInfos::contains_topic`].
    #[must_use]
    pub fn contains_topic(&self, topic: &str) -> bool {
        self.with(|infos| infos.contains_topic(topic))
    }

    /// See [`PubInfos::total_records`].
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.with(PubInfos::total_records)
    }
}

impl From<PubInfos> for SharedPubInfos {
    fn from(infos: PubInfos) -> Self {
        Self {
            inner: Arc::new(Mutex::new(infos)),
        }
    }
}
