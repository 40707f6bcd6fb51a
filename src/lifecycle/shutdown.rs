//! Shutdown coordination.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::StorageConfig;
use crate::store::{save_proverbs, ProverbStore};

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that all long-running tasks can subscribe to.
#[derive(Clone)]
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// What the shutdown sequence did with the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// The store was written back with this many proverbs.
    Saved(usize),
    /// Writing the data file failed; the failure was logged.
    Failed,
    /// Persistence is disabled; in-memory state was dropped.
    Skipped,
}

/// Task that turns a termination signal into the shutdown sequence.
pub struct ShutdownCoordinator {
    store: Arc<ProverbStore>,
    data_file: PathBuf,
    persist: bool,
    shutdown: Shutdown,
}

impl ShutdownCoordinator {
    pub fn new(store: Arc<ProverbStore>, storage: &StorageConfig, shutdown: Shutdown) -> Self {
        Self {
            store,
            data_file: storage.data_file.clone(),
            persist: storage.persist_on_shutdown,
            shutdown,
        }
    }

    /// Wait for `signal`, persist if enabled, then broadcast shutdown.
    ///
    /// A failed save is logged and does not stop the shutdown.
    pub async fn run<F>(self, signal: F) -> ShutdownOutcome
    where
        F: Future<Output = &'static str>,
    {
        let name = signal.await;
        tracing::info!(signal = name, "Signal received");

        let outcome = if self.persist {
            self.persist_store()
        } else {
            tracing::debug!("Persistence disabled, dropping in-memory proverbs");
            ShutdownOutcome::Skipped
        };

        tracing::info!("Bye.");
        self.shutdown.trigger();
        outcome
    }

    fn persist_store(&self) -> ShutdownOutcome {
        tracing::info!(path = %self.data_file.display(), "Saving proverbs");
        let snapshot = self.store.seal();

        match save_proverbs(&self.data_file, &snapshot) {
            Ok(()) => ShutdownOutcome::Saved(snapshot.len()),
            Err(e) => {
                tracing::error!(error = %e, "Failed to save proverbs");
                ShutdownOutcome::Failed
            }
        }
    }
}
