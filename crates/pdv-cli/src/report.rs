//! Valid-record report file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pdv_validate::RunSummary;

/// Write the dumps of every valid record to `path`, replacing any existing
/// file. An empty batch (or one without valid records) yields an empty file.
pub fn write_valid_report(path: &Path, summary: &RunSummary) -> Result<()> {
    fs::write(path, summary.report())
        .with_context(|| format!("write valid-record report {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        records = summary.valid_count(),
        "wrote valid-record report"
    );
    Ok(())
}
