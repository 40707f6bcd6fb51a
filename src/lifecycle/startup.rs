//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Load the seed file and build the store
//! - Start the metrics exporter when enabled
//! - Bind the listener, serve, and run the shutdown coordinator
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when the store is ready)

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::validation::join_errors;
use crate::config::{validate_config, ServiceConfig, StorageConfig, ValidationError};
use crate::http::HttpServer;
use crate::lifecycle::shutdown::{Shutdown, ShutdownCoordinator, ShutdownOutcome};
use crate::lifecycle::signals::termination_signal;
use crate::observability::metrics;
use crate::store::{load_proverbs, PersistenceError, ProverbStore, StoreError};

/// Errors that abort the process before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join_errors(.0))]
    Config(Vec<ValidationError>),

    #[error("failed to load seed file: {0}")]
    Seed(#[from] PersistenceError),

    #[error("invalid seed data: {0}")]
    Store(#[from] StoreError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Load the seed file named by `storage` into a fresh store.
pub fn load_store(storage: &StorageConfig) -> Result<Arc<ProverbStore>, StartupError> {
    let seed = load_proverbs(&storage.data_file)?;
    let store = ProverbStore::new(seed)?;
    if store.is_empty() {
        tracing::warn!(path = %storage.data_file.display(), "Seed file holds no proverbs");
    }
    tracing::info!(
        entries = store.len(),
        next_id = store.next_id(),
        persist_on_shutdown = storage.persist_on_shutdown,
        "Store initialized"
    );
    Ok(Arc::new(store))
}

/// Run the service until SIGINT/SIGTERM.
pub async fn run(config: ServiceConfig) -> Result<ShutdownOutcome, StartupError> {
    validate_config(&config).map_err(StartupError::Config)?;

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse::<SocketAddr>() {
            metrics::init_metrics(addr);
        }
    }

    let store = load_store(&config.storage)?;

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(address = %addr, "Listening for connections");
    }

    serve(config, store, listener, termination_signal()).await
}

/// Serve `store` on `listener` until `signal` resolves.
///
/// The shutdown coordinator runs alongside the server; once it has finished
/// its final read of the store it stops the server, which then drains
/// in-flight requests.
pub async fn serve<F>(
    config: ServiceConfig,
    store: Arc<ProverbStore>,
    listener: TcpListener,
    signal: F,
) -> Result<ShutdownOutcome, StartupError>
where
    F: Future<Output = &'static str> + Send + 'static,
{
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let coordinator = ShutdownCoordinator::new(store.clone(), &config.storage, shutdown);
    let coordinator_task = tokio::spawn(coordinator.run(signal));

    let server = HttpServer::new(&config, store);
    if let Err(e) = server.run(listener, server_shutdown).await {
        coordinator_task.abort();
        return Err(StartupError::Serve(e));
    }

    match coordinator_task.await {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            tracing::error!(error = %e, "Shutdown coordinator failed");
            Ok(ShutdownOutcome::Failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::store::FIRST_ID;

    #[test]
    fn test_load_store_from_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proverbs.json");
        std::fs::write(&path, r#"[{"id":1,"text":"A"},{"id":2,"text":"B"}]"#).unwrap();

        let storage = StorageConfig {
            data_file: path,
            persist_on_shutdown: true,
        };
        let store = load_store(&storage).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn test_load_store_from_empty_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proverbs.json");
        std::fs::write(&path, "[]").unwrap();

        let storage = StorageConfig {
            data_file: path,
            persist_on_shutdown: true,
        };
        let store = load_store(&storage).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), FIRST_ID);
    }

    #[test]
    fn test_duplicate_seed_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proverbs.json");
        std::fs::write(&path, r#"[{"id":1,"text":"A"},{"id":1,"text":"B"}]"#).unwrap();

        let storage = StorageConfig {
            data_file: path,
            persist_on_shutdown: true,
        };
        let err = load_store(&storage).unwrap_err();
        assert!(matches!(err, StartupError::Store(StoreError::DuplicateId(1))));
    }

    #[test]
    fn test_seed_at_max_id_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proverbs.json");
        std::fs::write(&path, format!(r#"[{{"id":{},"text":"A"}}]"#, u64::MAX)).unwrap();

        let storage = StorageConfig {
            data_file: path,
            persist_on_shutdown: true,
        };
        let err = load_store(&storage).unwrap_err();
        assert!(matches!(err, StartupError::Store(StoreError::IdsExhausted)));
    }

    #[tokio::test]
    async fn test_run_fails_without_seed_file() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        config.storage.data_file = PathBuf::from("/no/such/proverbs.json");

        let err = run(config).await.unwrap_err();
        assert!(matches!(err, StartupError::Seed(_)));
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_config() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "not an address".into();

        let err = run(config).await.unwrap_err();
        assert!(matches!(err, StartupError::Config(_)));
        assert!(err.to_string().contains("not an address"));
    }
}
