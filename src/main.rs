//! Proverb Service
//!
//! A JSON API over an in-memory proverb collection, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────────┐
//!                        │                PROVERB SERVICE                 │
//!                        │                                                │
//!     Client Request     │  ┌─────────┐    ┌─────────┐    ┌──────────┐   │
//!     ───────────────────┼─▶│  http   │───▶│ routing │───▶│ handlers │   │
//!                        │  │ server  │    │  table  │    └────┬─────┘   │
//!                        │  └─────────┘    └─────────┘         │         │
//!                        │                                     ▼         │
//!     Client Response    │                              ┌────────────┐   │
//!     ◀──────────────────┼──────────────────────────────│   store    │   │
//!                        │                              │ (one lock) │   │
//!                        │                              └─────┬──────┘   │
//!                        │                                    │          │
//!                        │  ┌──────────────────────┐   seed / save       │
//!                        │  │      lifecycle       │◀──── data file      │
//!                        │  │ startup / signals /  │                     │
//!                        │  │      shutdown        │                     │
//!                        │  └──────────────────────┘                     │
//!                        └───────────────────────────────────────────────┘
//! ```
//!
//! Exit code is 0 after a signal-triggered shutdown (even if saving failed)
//! and 1 when configuration, the seed file or the listener bind fails.

use std::path::PathBuf;

use clap::Parser;

use proverb_service::config::{load_config, ConfigError, ObservabilityConfig, ServiceConfig};
use proverb_service::lifecycle;
use proverb_service::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "proverb-service", version)]
#[command(about = "JSON API over an in-memory proverb collection", long_about = None)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long, env = "PROVERBS_CONFIG")]
    config: Option<PathBuf>,

    /// Listener address, overriding the config file.
    #[arg(long)]
    bind: Option<String>,

    /// Seed/persistence file, overriding the config file.
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Do not write proverbs back to the data file on shutdown.
    #[arg(long)]
    no_persist: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<ServiceConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(data_file) = &self.data_file {
            config.storage.data_file = data_file.clone();
        }
        if self.no_persist {
            config.storage.persist_on_shutdown = false;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        data_file = %config.storage.data_file.display(),
        persist_on_shutdown = config.storage.persist_on_shutdown,
        "proverb-service starting"
    );

    match lifecycle::run(config).await {
        Ok(outcome) => tracing::info!(?outcome, "Shutdown complete"),
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            std::process::exit(1);
        }
    }
}
