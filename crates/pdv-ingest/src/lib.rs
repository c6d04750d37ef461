//! Record ingestion.
//!
//! Loads the batch of personal records from a JSON file stored in the
//! legacy Windows Cyrillic codepage (Windows-1251).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pdv_ingest::read_records;
//!
//! let records = read_records(Path::new("records.json"))?;
//! println!("{} records", records.len());
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Record Loading ===
pub use reader::{decode_records, input_encoding, read_records};
