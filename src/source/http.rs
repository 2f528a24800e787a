//! HTTP dataset source.
//!
//! Fetches the dataset with cache-bypassing request headers so a refresh
//! always reaches the origin instead of an intermediary cache.

use crate::error::{FetchError, FetchResult};
use crate::source::DatasetSource;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use std::time::Duration;
use tracing::debug;

/// Dataset source backed by an HTTP(S) URL.
pub struct HttpSource {
    client: reqwest::Client,
    url: reqwest::Url,
    location: String,
}

impl HttpSource {
    /// Create a new HTTP source for the given URL.
    pub fn new(url: &str, timeout: Duration) -> FetchResult<Self> {
        let parsed =
            reqwest::Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            url: parsed,
            location: url.to_string(),
        })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch_raw(&self) -> FetchResult<String> {
        debug!(url = %self.url, "requesting dataset");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_rejected() {
        let result = HttpSource::new("http://", Duration::from_secs(5));
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_valid_url_accepted() {
        let source = HttpSource::new("https://example.com/results.json", Duration::from_secs(5))
            .unwrap();
        assert_eq!(source.location(), "https://example.com/results.json");
    }
}
