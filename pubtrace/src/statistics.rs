// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-topic latency summaries built from the store's read accessors.

use core::fmt;
use core::time::Duration;
use pubtrace_core::{HasTimestamp, PubInfo, PubInfos, Timestamp};

/// Summary of the retained records of one topic.
///
/// Latency figures skip records whose output predates their input; they are
/// `None` when no record qualifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicStatistics {
    pub topic: String,
    pub count: usize,
    pub oldest: Option<Timestamp>,
    pub newest: Option<Timestamp>,
    pub min_latency: Option<Duration>,
    pub max_latency: Option<Duration>,
    pub mean_latency: Option<Duration>,
}

impl TopicStatistics {
    /// Summarizes `records`, which must be in ascending output stamp order.
    pub fn from_records<'a>(topic: &str, records: impl IntoIterator<Item = &'a PubInfo>) -> Self {
        let mut stats = Self {
            topic: topic.to_owned(),
            count: 0,
            oldest: None,
            newest: None,
            min_latency: None,
            max_latency: None,
            mean_latency: None,
        };
        let mut latency_sum: u128 = 0;
        let mut latency_count: u128 = 0;

        for record in records {
            stats.count += 1;
            stats.oldest.get_or_insert(record.timestamp());
            stats.newest = Some(record.timestamp());

            if let Some(latency) = record.latency() {
                stats.min_latency = Some(stats.min_latency.map_or(latency, |m| m.min(latency)));
                stats.max_latency = Some(stats.max_latency.map_or(latency, |m| m.max(latency)));
                latency_sum += latency.as_nanos();
                latency_count += 1;
            }
        }

        if latency_count > 0 {
            let mean = u64::try_from(latency_sum / latency_count).unwrap_or(u64::MAX);
            stats.mean_latency = Some(Duration::from_nanos(mean));
        }
        stats
    }
}

impl fmt::Display for TopicStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: count={} latency min={} max={} mean={}",
            self.topic,
            self.count,
            duration_label(self.min_latency),
            duration_label(self.max_latency),
            duration_label(self.mean_latency)
        )
    }
}

/// Summaries of every known topic, sorted by topic name.
///
/// Topics that were emptied by pruning are listed with a zero count.
///
/// ```
/// use pubtrace::Statistics;
/// use pubtrace_core::{PubInfo, PubInfos, Timestamp};
///
/// let ts = Timestamp::from_secs;
/// let mut infos = PubInfos::new();
/// infos.add(PubInfo::new("topic1", ts(8), ts(9), ts(10)).unwrap());
///
/// let stats = Statistics::collect(&infos);
/// assert_eq!(
///     stats.to_string(),
///     "topic1: count=1 latency min=2.000000000 max=2.000000000 mean=2.000000000\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    topics: Vec<TopicStatistics>,
}

impl Statistics {
    #[must_use]
    pub fn collect(infos: &PubInfos) -> Self {
        let mut topics: Vec<TopicStatistics> = infos
            .topics()
            .map(|topic| TopicStatistics::from_records(topic, infos.records_for(topic)))
            .collect();
        topics.sort_by(|a, b| a.topic.cmp(&b.topic));
        Self { topics }
    }

    pub fn topics(&self) -> &[TopicStatistics] {
        &self.topics
    }

    pub fn get(&self, topic: &str) -> Option<&TopicStatistics> {
        self.topics.iter().find(|stats| stats.topic == topic)
    }

    /// Retained records across all topics.
    pub fn total_count(&self) -> usize {
        self.topics.iter().map(|stats| stats.count).sum()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stats in &self.topics {
            writeln!(f, "{stats}")?;
        }
        Ok(())
    }
}

fn duration_label(duration: Option<Duration>) -> String {
    duration.map_or_else(
        || "-".to_string(),
        |d| format!("{}.{:09}", d.as_secs(), d.subsec_nanos()),
    )
}
