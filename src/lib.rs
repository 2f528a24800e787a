//! # rollcheck - Roll-Number Result Lookup
//!
//! rollcheck fetches a static JSON document mapping examination roll numbers
//! to academic result records and answers lookups against it: pass/fail
//! status, GPA, or referred-subject codes.
//!
//! ## Features
//!
//! - **Typed Records**: pass and referral variants validated at the wire
//!   boundary, with unknown record kinds rejected
//! - **Cache-Bypassing Fetch**: refreshes always reach the origin
//! - **Multiple Sources**: HTTP(S) URLs and local files
//! - **Per-Record Export**: single-key pretty-printed JSON documents
//! - **Multiple Output Formats**: plain text cards, JSON, and CSV
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use rollcheck::source::FileSource;
//! use rollcheck::store::ResultStore;
//! use rollcheck::types::Roll;
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = FileSource::new("results.json");
//!     let mut store = ResultStore::new();
//!     store.load(&source).await;
//!
//!     let roll: Roll = "123456".parse().unwrap();
//!     match store.lookup(&roll) {
//!         Some(record) => println!("{}: {}", roll, record.status()),
//!         None => println!("{}: no result", roll),
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Core type definitions with newtype patterns for type safety
//! - [`store`] - The in-memory result store and its load/lookup contract
//! - [`source`] - Dataset source implementations and the `DatasetSource` trait
//! - [`config`] - Configuration management
//! - [`error`] - Comprehensive error types
//! - [`output`] - Output formatting utilities

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod source;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, FetchError};
pub use source::{create_source, DatasetSource, FileSource, HttpSource};
pub use store::{Dataset, ResultStore};
pub use types::{ResultRecord, ResultStatus, Roll};
