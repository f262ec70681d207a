// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::{AggregatorConfig, DebugContext, DebugLevel};
use crate::logging::{info, warn};
use crate::statistics::Statistics;
use crate::tracking_tag::MessageTrackingTag;
use pubtrace_core::{PubInfo, Result, ResultExt, SharedPubInfos, Timestamp};

/// Feeds publish notifications into a retention store and prunes it.
///
/// The aggregator never reads a clock: every call that depends on time takes
/// `now` explicitly. Use [`Pruner`](crate::Pruner) for clock-driven pruning.
///
/// ```
/// use pubtrace::{Aggregator, AggregatorConfig, MessageTrackingTag};
/// use pubtrace_core::Timestamp;
/// use std::time::Duration;
///
/// let ts = Timestamp::from_secs;
/// let mut aggregator =
///     Aggregator::new(AggregatorConfig::default().with_retention(Duration::from_secs(5)));
///
/// let tag = MessageTrackingTag::new("/planning/trajectory", ts(10))
///     .with_input("/perception/objects", ts(8), ts(9));
/// aggregator.on_tracking_tag(&tag, ts(10)).unwrap();
///
/// // watermark = 16 - 5 = 11, so the record stamped 10 goes
/// assert_eq!(aggregator.prune(ts(16)), 1);
/// assert!(aggregator.store().contains_topic("/planning/trajectory"));
/// ```
#[derive(Debug)]
pub struct Aggregator {
    store: SharedPubInfos,
    config: AggregatorConfig,
    debug: DebugContext,
}

impl Aggregator {
    /// Creates an aggregator over a fresh, empty store.
    #[must_use]
    pub fn new(config: AggregatorConfig) -> Self {
        Self::with_store(config, SharedPubInfos::new())
    }

    /// Creates an aggregator over an existing store, e.g. one shared with a reporter.
    #[must_use]
    pub fn with_store(config: AggregatorConfig, store: SharedPubInfos) -> Self {
        let debug = DebugContext::new(config.debug());
        Self {
            store,
            config,
            debug,
        }
    }

    pub fn store(&self) -> &SharedPubInfos {
        &self.store
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub fn debug_context(&self) -> &DebugContext {
        &self.debug
    }

    /// Runtime access to the debug switches.
    pub fn debug_context_mut(&mut self) -> &mut DebugContext {
        &mut self.debug
    }

    /// Handles one tracking message observed at `now`.
    ///
    /// Returns the stored record, or `None` for an output without inputs.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the tag lacks a stamp; the store is left
    /// untouched.
    pub fn on_tracking_tag(
        &mut self,
        tag: &MessageTrackingTag,
        now: Timestamp,
    ) -> Result<Option<PubInfo>> {
        if self.debug.msg_dump_enabled() {
            info!("\n{}", tag.dump(self.config.path_name(), now));
        }

        let info = match tag
            .to_pub_info()
            .with_context(|| format!("tracking tag on '{}'", tag.topic_name()))
        {
            Ok(Some(info)) => info,
            Ok(None) => {
                self.debug.print(
                    DebugLevel::Debug,
                    now,
                    &format!("skip [{}]: no inputs", tag.topic_name()),
                );
                return Ok(None);
            }
            Err(err) => {
                warn!("dropping tracking tag: {}", err);
                return Err(err);
            }
        };

        self.add(info.clone(), now);
        Ok(Some(info))
    }

    /// Stores a record built by the caller. Returns the record it replaced, if any.
    pub fn add(&mut self, info: PubInfo, now: Timestamp) -> Option<PubInfo> {
        let message = self
            .debug
            .should_print(DebugLevel::Debug)
            .then(|| format!("add {info}"));
        let replaced = self.store.add(info);

        if let Some(message) = message {
            self.debug.print(DebugLevel::Debug, now, &message);
        }
        if let Some(old) = &replaced {
            self.debug
                .print(DebugLevel::Info, now, &format!("replaced {old}"));
        }
        replaced
    }

    /// Prunes every topic against the watermark `now - retention`.
    ///
    /// Returns the number of records removed.
    pub fn prune(&mut self, now: Timestamp) -> usize {
        prune_store(&self.store, &self.config, &mut self.debug, now)
    }

    /// Latency summary of what the store currently retains.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        self.store.with(Statistics::collect)
    }
}

/// Erases records of `store` older than `now - retention`, reporting through `debug`.
pub(crate) fn prune_store(
    store: &SharedPubInfos,
    config: &AggregatorConfig,
    debug: &mut DebugContext,
    now: Timestamp,
) -> usize {
    let Some(watermark) = config.watermark(now) else {
        return 0;
    };
    let removed = store.erase_until(watermark);
    if removed > 0 {
        debug.print(
            DebugLevel::Debug,
            now,
            &format!(
                "pruned {removed} records before {watermark} on '{}'",
                config.path_name()
            ),
        );
    }
    removed
}
