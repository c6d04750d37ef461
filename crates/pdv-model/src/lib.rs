//! Data model for personal record validation.
//!
//! A [`Record`] holds the nine submitted [`Field`] values of one person;
//! validating it yields a [`Classification`].

pub mod classification;
pub mod field;
pub mod record;

pub use classification::Classification;
pub use field::Field;
pub use record::{DELIMITER_WIDTH, Record, RecordDump};
