// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Publish latency aggregator for pub/sub message graphs.
//!
//! Nodes publish, next to each output, a tracking message naming the inputs
//! the output was derived from. The [`Aggregator`] turns every tracking
//! message into a [`PubInfo`](pubtrace_core::PubInfo), keeps it in a
//! per-topic retention store keyed by the output's header stamp, and prunes
//! records that fall behind `now - retention`.
//!
//! # Overview
//!
//! - **[`Aggregator`]** - ingests [`MessageTrackingTag`]s and prunes on demand
//! - **[`AggregatorConfig`] / [`DebugSettings`]** - retention, prune period and debug switches
//! - **[`DebugContext`]** - debug switches plus print history, one per aggregator or pruner
//! - **[`TimeSource`]** - injected clock ([`SystemTimeSource`], [`ManualTimeSource`])
//! - **[`Pruner`]** - background pruning task (`runtime-tokio` feature)
//! - **[`Statistics`]** - per-topic latency summaries
//!
//! # Features
//!
//! - `tracing` (default) - log through `tracing`; otherwise stdout/stderr
//! - `runtime-tokio` (default) - enables [`Pruner`]
//!
//! # Example
//!
//! ```
//! use pubtrace::{Aggregator, AggregatorConfig, MessageTrackingTag};
//! use pubtrace_core::Timestamp;
//!
//! let ts = Timestamp::from_secs;
//! let mut aggregator = Aggregator::new(AggregatorConfig::default());
//!
//! let tag = MessageTrackingTag::new("/control/command", ts(12))
//!     .with_input("/planning/trajectory", ts(10), ts(11))
//!     .with_input("/localization/pose", ts(9), ts(11));
//! aggregator.on_tracking_tag(&tag, ts(12)).unwrap();
//!
//! let stats = aggregator.statistics();
//! let control = stats.get("/control/command").unwrap();
//! assert_eq!(control.max_latency, Some(std::time::Duration::from_secs(3)));
//! ```

mod logging;

pub mod aggregator;
pub mod config;
#[cfg(feature = "runtime-tokio")]
pub mod pruner;
pub mod statistics;
pub mod time_source;
pub mod tracking_tag;

pub use aggregator::Aggregator;
pub use config::{
    AggregatorConfig, DebugContext, DebugLevel, DebugSettings, DEFAULT_PRUNE_INTERVAL,
    DEFAULT_RETENTION,
};
#[cfg(feature = "runtime-tokio")]
pub use pruner::{Pruner, StopHandle};
pub use statistics::{Statistics, TopicStatistics};
pub use time_source::{ManualTimeSource, SystemTimeSource, TimeSource};
pub use tracking_tag::{InputInfo, MessageTrackingTag, OutputInfo};
