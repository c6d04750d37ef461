use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span, trace};

use pdv_ingest::read_records;
use pdv_model::Classification;
use pdv_validate::BatchClassifier;

use crate::logging::redact_value;
use crate::report::write_valid_report;
use crate::types::{CheckRequest, CheckResult};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records";

/// Load, classify, and report one batch.
///
/// Loading happens before anything else, so an unreadable input never
/// leaves a report file behind.
pub fn run_check(request: &CheckRequest) -> Result<CheckResult> {
    let span = info_span!("check", input = %request.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let records = read_records(&request.input)
        .with_context(|| format!("load records from {}", request.input.display()))?;

    let progress = progress_bar(records.len(), request.show_progress);
    let mut classifier = BatchClassifier::new();
    for (index, record) in records.iter().enumerate() {
        if let Classification::Invalid(field) = classifier.observe(record) {
            trace!(
                record = index,
                rule = %field,
                value = redact_value(record.get(field).unwrap_or("<missing>")),
                "rejected value"
            );
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    let summary = classifier.finish();

    write_valid_report(&request.output, &summary)?;

    info!(
        records = records.len(),
        valid = summary.valid_count(),
        invalid = summary.invalid_count(),
        elapsed_ms = start.elapsed().as_millis(),
        "check complete"
    );
    Ok(CheckResult {
        input: request.input.clone(),
        output: request.output.clone(),
        summary,
    })
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    let bar = ProgressBar::new(len as u64);
    bar.set_style(style);
    bar
}
