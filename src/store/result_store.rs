//! The result store: wholesale-loaded mapping from roll numbers to records.
//!
//! The store is either empty (no load attempted, or the last load failed) or
//! fully populated from the last successful fetch. Loads replace the whole
//! map; there are no partial or merged states, so a lookup always sees one
//! consistent snapshot.

use crate::source::DatasetSource;
use crate::types::{ResultRecord, Roll};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// The complete roll-to-record mapping as parsed from a dataset body.
pub type Dataset = BTreeMap<Roll, ResultRecord>;

/// In-memory store of result records, keyed by roll number.
#[derive(Debug, Default)]
pub struct ResultStore {
    records: Dataset,
    fetched_at: Option<DateTime<Utc>>,
}

impl ResultStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the record for a roll number in the current snapshot.
    ///
    /// Pure map access; never triggers a load. Returns `None` when the roll
    /// is absent or when no dataset has been loaded.
    pub fn lookup(&self, roll: &Roll) -> Option<&ResultRecord> {
        self.records.get(roll)
    }

    /// Load the dataset from the given source, replacing the store's
    /// contents entirely.
    ///
    /// On any failure the store is reset to empty and the error is logged;
    /// nothing propagates to the caller. Repeated calls simply re-fetch and
    /// overwrite.
    pub async fn load(&mut self, source: &dyn DatasetSource) {
        match source.fetch().await {
            Ok(records) => {
                debug!(count = records.len(), source = source.location(), "dataset loaded");
                self.replace(records);
            }
            Err(e) => {
                warn!(source = source.location(), error = %e, "dataset load failed");
                self.clear();
            }
        }
    }

    /// Load only if the store is still empty.
    ///
    /// Lookup paths call this so a populated store is never re-fetched
    /// behind the user's back; `load` remains the explicit refresh.
    pub async fn ensure_loaded(&mut self, source: &dyn DatasetSource) {
        if self.is_empty() {
            self.load(source).await;
        }
    }

    /// Replace the store's contents with a freshly fetched dataset.
    pub fn replace(&mut self, records: Dataset) {
        self.records = records;
        self.fetched_at = Some(Utc::now());
    }

    /// Reset the store to the empty state.
    pub fn clear(&mut self) {
        self.records.clear();
        self.fetched_at = None;
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// When the current snapshot was loaded, if any.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Iterate over records in roll order.
    pub fn iter(&self) -> impl Iterator<Item = (&Roll, &ResultRecord)> {
        self.records.iter()
    }

    /// Summarize the current snapshot.
    pub fn summary(&self) -> StoreSummary {
        let passed = self.records.values().filter(|r| r.is_passed()).count();

        StoreSummary {
            total: self.records.len(),
            passed,
            referred: self.records.len() - passed,
        }
    }
}

/// Record counts for the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSummary {
    /// Total records in the store.
    pub total: usize,
    /// Records with a passing result.
    pub passed: usize,
    /// Records with a referred result.
    pub referred: usize,
}

impl std::fmt::Display for StoreSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} records ({} passed, {} referred)",
            self.total, self.passed, self.referred
        )
    }
}
