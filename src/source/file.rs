//! Local file dataset source.
//!
//! Covers datasets served from disk, e.g. a `results.json` sitting next to
//! the tool instead of behind a web server.

use crate::error::{FetchError, FetchResult};
use crate::source::DatasetSource;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Dataset source backed by a local file.
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch_raw(&self) -> FetchResult<String> {
        debug!(path = %self.location, "reading dataset");

        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResultRecord, Roll};
    use std::io::Write;

    #[tokio::test]
    async fn test_fetch_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"123456": {{"type": "passed", "gpa": 3.75}}}}"#
        )
        .unwrap();

        let source = FileSource::new(file.path());
        let dataset = source.fetch().await.unwrap();

        let roll = Roll::new("123456").unwrap();
        assert_eq!(dataset.get(&roll), Some(&ResultRecord::Passed { gpa: 3.75 }));
    }

    #[tokio::test]
    async fn test_missing_file_errors() {
        let source = FileSource::new("/nonexistent/results.json");
        assert!(matches!(
            source.fetch_raw().await,
            Err(FetchError::ReadFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not valid json").unwrap();

        let source = FileSource::new(file.path());
        assert!(matches!(
            source.fetch().await,
            Err(FetchError::InvalidBody(_))
        ));
    }
}
