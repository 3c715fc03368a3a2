//! HTTP download of registry files.

use super::Fetcher;
use crate::error::RirError;
use reqwest::StatusCode;
use std::time::Duration;

/// Downloads with a single GET per URL. No retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<HttpFetcher, RirError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RirError::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(HttpFetcher { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, RirError> {
        let retrieval_error = |reason: String| RirError::Retrieval {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| retrieval_error(format!("request error: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(retrieval_error(format!("status {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| retrieval_error(format!("error reading body: {e}")))
    }
}
