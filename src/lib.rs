//! Proverb Service Library
//!
//! A small JSON API over an in-memory collection of proverbs, seeded from a
//! JSON file and optionally written back to it on SIGINT/SIGTERM.

pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod store;

pub use client::ProverbClient;
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{Proverb, ProverbStore};
