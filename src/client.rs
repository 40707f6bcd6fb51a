//! Typed HTTP client for a running proverb service.

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::store::{Proverb, ProverbId};

/// Errors returned by [`ProverbClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

/// Client for the `/proverbs` API.
#[derive(Debug, Clone)]
pub struct ProverbClient {
    client: Client,
    base_url: String,
}

impl ProverbClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest` client (pool settings, proxies).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list(&self) -> Result<Vec<Proverb>, ClientError> {
        let res = self.client.get(self.url("/proverbs")).send().await?;
        Ok(check(res).await?.json().await?)
    }

    pub async fn get(&self, id: ProverbId) -> Result<Proverb, ClientError> {
        let res = self.client.get(self.url(&format!("/proverbs/{id}"))).send().await?;
        Ok(check(res).await?.json().await?)
    }

    pub async fn create(&self, text: &str) -> Result<Proverb, ClientError> {
        let res = self
            .client
            .post(self.url("/proverbs"))
            .json(&TextBody { text })
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }

    pub async fn update(&self, id: ProverbId, text: &str) -> Result<Proverb, ClientError> {
        let res = self
            .client
            .put(self.url(&format!("/proverbs/{id}")))
            .json(&TextBody { text })
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }

    pub async fn delete(&self, id: ProverbId) -> Result<(), ClientError> {
        let res = self
            .client
            .delete(self.url(&format!("/proverbs/{id}")))
            .send()
            .await?;
        check(res).await?;
        Ok(())
    }
}

/// Turn non-success statuses into [`ClientError::Status`].
async fn check(res: Response) -> Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}

impl ClientError {
    /// HTTP status, when the service answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
        }
    }
}
