use std::path::PathBuf;

use pdv_validate::RunSummary;

/// Parameters of one validation run.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub show_progress: bool,
}

#[derive(Debug)]
pub struct CheckResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: RunSummary,
}
