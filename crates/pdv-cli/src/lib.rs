//! Command-line front end of the personal record validator.

pub mod commands;
pub mod logging;
pub mod report;
pub mod summary;
pub mod types;
