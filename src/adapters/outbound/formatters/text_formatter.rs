use crate::file_demo::domain::DemoReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter: one line per write count, then the recovered text
///
/// ```text
/// the bytes written are 11
/// the bytes written are 13
/// Hello World
/// ```
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &DemoReport) -> Result<String> {
        let mut output = String::new();
        for file in report.written() {
            writeln!(output, "the bytes written are {}", file.bytes_written())?;
        }
        writeln!(output, "{}", report.text())?;
        Ok(output)
    }
}
