//! In-memory result store.
//!
//! Holds the roll-to-record mapping loaded from a dataset source and answers
//! synchronous lookups against the current snapshot.

mod result_store;

pub use result_store::{Dataset, ResultStore, StoreSummary};
