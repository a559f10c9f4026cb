use crate::file_demo::domain::DemoReport;
use std::path::PathBuf;

/// DemoResponse - Output of the run use case
#[derive(Debug, Clone)]
pub struct DemoResponse {
    /// Write counts and read-back text, ready for formatting
    pub report: DemoReport,
    /// Files that did not exist before this run
    pub created_files: Vec<PathBuf>,
}

impl DemoResponse {
    pub fn new(report: DemoReport, created_files: Vec<PathBuf>) -> Self {
        Self {
            report,
            created_files,
        }
    }
}
