//! Scheduled dashboard refresh
//!
//! A [`Poller`] owns at most one background task. Each tick awaits its fetch
//! before the next tick is taken, so fetches never overlap; ticks missed
//! while a slow fetch runs are skipped rather than replayed. Results are
//! published on a `watch` channel, so readers always see the latest snapshot.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::client::SnapshotSource;
use crate::config::WatchFilters;
use crate::snapshot::DashboardSnapshot;

struct Running {
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

/// Cancellable periodic fetcher
pub struct Poller<S: SnapshotSource> {
    source: Arc<S>,
    filters: WatchFilters,
    period: Duration,
    tx: watch::Sender<DashboardSnapshot>,
    running: Option<Running>,
}

impl<S: SnapshotSource> Poller<S> {
    pub fn new(source: Arc<S>, filters: WatchFilters, period: Duration) -> Self {
        let (tx, _rx) = watch::channel(DashboardSnapshot::empty());
        Self {
            source,
            filters,
            period,
            tx,
            running: None,
        }
    }

    /// Receiver for published snapshots
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.tx.subscribe()
    }

    pub fn is_running(&self) -> bool {
        self.running.as_ref().is_some_and(|r| !r.handle.is_finished())
    }

    /// Change the filters; takes effect on the next fetch after a restart
    pub fn set_filters(&mut self, filters: WatchFilters) {
        self.filters = filters;
    }

    /// Spawn the refresh task; no-op when already running
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let (shutdown, mut shutdown_rx) = oneshot::channel();
        let source = Arc::clone(&self.source);
        let filters = self.filters.clone();
        let tx = self.tx.clone();
        let period = self.period;

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        refresh_once(source.as_ref(), &filters, &tx).await;
                    }
                }
            }
            debug!("Refresh task exited");
        });

        info!(period_ms = self.period.as_millis() as u64, "Auto-refresh started");
        self.running = Some(Running { shutdown, handle });
    }

    /// Signal the task to stop and wait for it to finish
    pub async fn stop(&mut self) {
        let Some(Running { shutdown, handle }) = self.running.take() else {
            return;
        };

        // The task may already be gone; a closed channel is fine
        let _ = shutdown.send(());
        if let Err(e) = handle.await {
            warn!(error = %e, "Refresh task ended abnormally");
        }
        info!("Auto-refresh stopped");
    }

    /// Start or stop according to the auto-refresh flag
    pub async fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.start();
        } else {
            self.stop().await;
        }
    }

    /// Fetch once right now, outside the schedule
    pub async fn refresh(&self) {
        refresh_once(self.source.as_ref(), &self.filters, &self.tx).await;
    }
}

impl<S: SnapshotSource> Drop for Poller<S> {
    fn drop(&mut self) {
        if let Some(running) = self.running.take() {
            running.handle.abort();
        }
    }
}

async fn refresh_once<S: SnapshotSource + ?Sized>(
    source: &S,
    filters: &WatchFilters,
    tx: &watch::Sender<DashboardSnapshot>,
) {
    let query = filters.query(Utc::now().date_naive());
    let snapshot = source.fetch(&query).await;

    tx.send_if_modified(|current| {
        if *current == snapshot {
            false
        } else {
            *current = snapshot;
            info!(window = %query.window, "Dashboard data updated");
            true
        }
    });
}
