//! Retrieval of registry statistics files.
//!
//! - [`http`] - download over HTTP with reqwest

mod http;

use crate::error::RirError;

pub use http::HttpFetcher;

/// Returns the raw text published at a URL, or fails the run.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String, RirError>;
}
