use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::domain::Match;
use thiserror::Error;

pub const RESULTS_ENDPOINT: &str = "/api/results";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed results payload: {0}")]
    Malformed(String),
}

/// Provider of the full match list. The HTTP implementation talks to the
/// results server; `StaticResultSource` substitutes an in-memory table.
#[async_trait]
pub trait ResultSource: Send + Sync {
    async fn fetch_matches(&self) -> Result<Vec<Match>, TransportError>;
}

pub struct HttpResultSource {
    http: Client,
    base_url: String,
}

impl HttpResultSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ResultSource for HttpResultSource {
    async fn fetch_matches(&self) -> Result<Vec<Match>, TransportError> {
        let response = self
            .http
            .get(format!("{}{RESULTS_ENDPOINT}", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        // A well-formed payload is a JSON array of match objects; any
        // other shape counts as a transport failure.
        let body: serde_json::Value = response.json().await?;
        if !body.is_array() {
            return Err(TransportError::Malformed(
                "results payload is not an array".into(),
            ));
        }
        serde_json::from_value(body).map_err(|e| TransportError::Malformed(e.to_string()))
    }
}

pub struct StaticResultSource {
    matches: Vec<Match>,
}

impl StaticResultSource {
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }
}

#[async_trait]
impl ResultSource for StaticResultSource {
    async fn fetch_matches(&self) -> Result<Vec<Match>, TransportError> {
        Ok(self.matches.clone())
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
