//! Dataset source abstraction.
//!
//! Defines a common interface for fetching the result dataset, keeping I/O
//! separate from the store so lookups stay pure and testable.

mod file;
mod http;

pub use file::FileSource;
pub use http::HttpSource;

use crate::error::{FetchError, FetchResult};
use crate::store::Dataset;
use async_trait::async_trait;
use std::time::Duration;

/// Trait for dataset source implementations.
///
/// A source produces the complete roll-to-record mapping in one fetch.
/// Implementations cover remote HTTP documents and local files.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location of the dataset (URL or path).
    fn location(&self) -> &str;

    /// Fetch the raw dataset body.
    async fn fetch_raw(&self) -> FetchResult<String>;

    /// Fetch and parse the dataset.
    ///
    /// Default implementation parses the raw body; implementations may
    /// override if they can decode more directly.
    async fn fetch(&self) -> FetchResult<Dataset> {
        let body = self.fetch_raw().await?;
        parse_dataset(&body)
    }
}

/// A boxed source for dynamic dispatch.
pub type BoxedSource = Box<dyn DatasetSource>;

/// Create a source for the given location.
///
/// `http://` and `https://` locations fetch over the network; anything else
/// is treated as a local file path.
pub fn create_source(location: &str, timeout: Duration) -> FetchResult<BoxedSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

/// Parse a dataset body into the roll-to-record mapping.
///
/// The body must be a JSON object keyed by roll numbers. Records with an
/// unknown `type` tag, or keys that are not valid roll numbers, fail the
/// parse wholesale; the store never holds a partially valid dataset.
pub fn parse_dataset(body: &str) -> FetchResult<Dataset> {
    serde_json::from_str(body).map_err(|e| FetchError::InvalidBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResultRecord, Roll};

    #[test]
    fn test_parse_dataset() {
        let body = r#"{
            "123456": {"type": "passed", "gpa": 3.75},
            "123457": {"type": "referred", "subjects": ["6621", "6623"]}
        }"#;

        let dataset = parse_dataset(body).unwrap();
        assert_eq!(dataset.len(), 2);

        let roll = Roll::new("123456").unwrap();
        assert_eq!(dataset.get(&roll), Some(&ResultRecord::Passed { gpa: 3.75 }));
    }

    #[test]
    fn test_parse_dataset_empty_object() {
        let dataset = parse_dataset("{}").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_parse_dataset_rejects_unknown_tag() {
        let body = r#"{"123456": {"type": "absent"}}"#;
        assert!(matches!(
            parse_dataset(body),
            Err(FetchError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_parse_dataset_rejects_invalid_roll_key() {
        let body = r#"{"not-a-roll": {"type": "passed", "gpa": 4.0}}"#;
        assert!(matches!(
            parse_dataset(body),
            Err(FetchError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_parse_dataset_rejects_non_object() {
        assert!(parse_dataset("[1, 2, 3]").is_err());
        assert!(parse_dataset("not json").is_err());
    }

    #[test]
    fn test_create_source_dispatch() {
        let http = create_source("https://example.com/results.json", Duration::from_secs(5))
            .unwrap();
        assert_eq!(http.location(), "https://example.com/results.json");

        let file = create_source("results.json", Duration::from_secs(5)).unwrap();
        assert_eq!(file.location(), "results.json");
    }
}
