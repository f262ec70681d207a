// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Clock-driven background pruning on the tokio runtime.

use crate::aggregator::prune_store;
use crate::config::{AggregatorConfig, DebugContext, DebugLevel};
use crate::time_source::TimeSource;
use pubtrace_core::{PubtraceError, Result, SharedPubInfos};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// A spawned task that prunes a store every `prune_interval`.
///
/// Each tick reads the [`TimeSource`] and erases records older than
/// `now - retention`. The first tick fires immediately. Dropping the pruner
/// stops the task.
///
/// Debug prints follow the config's [`DebugSettings`](crate::DebugSettings),
/// with a print history separate from any aggregator's.
///
/// ```no_run
/// use pubtrace::{Aggregator, AggregatorConfig, Pruner, SystemTimeSource};
///
/// # async fn example() -> pubtrace_core::Result<()> {
/// let aggregator = Aggregator::new(AggregatorConfig::default());
/// let pruner = Pruner::spawn(aggregator.store().clone(), aggregator.config(), SystemTimeSource)?;
///
/// // ... feed the aggregator ...
///
/// let removed = pruner.shutdown().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Pruner {
    stop: StopHandle,
    handle: JoinHandle<usize>,
}

/// Cloneable switch that stops a [`Pruner`] from anywhere.
///
/// Stopping is permanent; a stopped pruner finishes its current tick and exits.
#[derive(Debug, Clone)]
pub struct StopHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl StopHandle {
    fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Idempotent.
    pub fn stop(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_stopped(&self) -> bool {
        *self.sender.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }
}

impl Pruner {
    /// Spawns the pruning task. Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the configured prune interval is zero.
    pub fn spawn<T: TimeSource>(
        store: SharedPubInfos,
        config: &AggregatorConfig,
        time_source: T,
    ) -> Result<Self> {
        if config.prune_interval().is_zero() {
            return Err(PubtraceError::invalid_argument(
                "prune interval must be non-zero",
            ));
        }

        let stop = StopHandle::new();
        let handle = tokio::spawn(run(store, config.clone(), time_source, stop.subscribe()));
        Ok(Self { stop, handle })
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stops the task and waits for it. Returns the total number of records it pruned.
    ///
    /// # Errors
    /// Returns `TaskError` if the task panicked or was aborted.
    pub async fn shutdown(mut self) -> Result<usize> {
        self.stop.stop();
        (&mut self.handle)
            .await
            .map_err(|err| PubtraceError::task_error(err.to_string()))
    }
}

impl Drop for Pruner {
    fn drop(&mut self) {
        self.stop.stop();
    }
}

async fn run<T: TimeSource>(
    store: SharedPubInfos,
    config: AggregatorConfig,
    time_source: T,
    mut stopped: watch::Receiver<bool>,
) -> usize {
    let mut debug = DebugContext::new(config.debug());
    let mut ticker = tokio::time::interval(config.prune_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut total = 0;

    loop {
        let is_stopped = *stopped.borrow_and_update();
        if is_stopped {
            break;
        }
        tokio::select! {
            changed = stopped.changed() => {
                // Err: every sender is gone.
                if changed.is_err() {
                    break;
                }
            }
            _ = ticker.tick() => {
                total += prune_store(&store, &config, &mut debug, time_source.now());
            }
        }
    }

    debug.print(
        DebugLevel::Debug,
        time_source.now(),
        &format!(
            "pruner for '{}' stopped after removing {total} records",
            config.path_name()
        ),
    );
    total
}
