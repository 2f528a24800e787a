//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of result
//! records and dataset listings.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::to_csv;
pub use json_format::{dataset_string, export_payload, export_string};
pub use plain::{
    print_error, print_info, print_listing, print_not_found, print_result, print_success,
    print_warning,
};
