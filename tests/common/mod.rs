//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use proverb_service::client::ProverbClient;
use proverb_service::config::ServiceConfig;
use proverb_service::lifecycle::{load_store, serve, ShutdownOutcome, StartupError};

/// A proverb service running on an ephemeral port with its own data file.
pub struct TestService {
    pub addr: SocketAddr,
    pub client: ProverbClient,
    data_file: PathBuf,
    stop_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<Result<ShutdownOutcome, StartupError>>>,
    _dir: TempDir,
}

impl TestService {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Deliver the termination signal and wait for the server to exit.
    pub async fn stop(&mut self) -> ShutdownOutcome {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        let handle = self.handle.take().expect("service already stopped");
        handle.await.unwrap().unwrap()
    }
}

/// A reqwest client that never reuses connections, so shutdown drains fast.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Seed a temporary data file and start the service on it.
pub async fn start_service(seed: &str, persist: bool) -> TestService {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("proverbs.json");
    std::fs::write(&data_file, seed).unwrap();

    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.storage.data_file = data_file.clone();
    config.storage.persist_on_shutdown = persist;

    let store = load_store(&config.storage).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let signal = async move {
        let _ = stop_rx.await;
        "SIGTERM"
    };
    let handle = tokio::spawn(serve(config, store, listener, signal));

    TestService {
        addr,
        client: ProverbClient::with_client(http_client(), &format!("http://{}", addr)),
        data_file,
        stop_tx: Some(stop_tx),
        handle: Some(handle),
        _dir: dir,
    }
}
