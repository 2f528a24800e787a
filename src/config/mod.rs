//! Configuration management for rollcheck.
//!
//! Provides XDG-compliant settings storage: where the dataset lives and how
//! output should look by default.

mod settings;

pub use settings::{AppSettings, Paths};
