use crate::file_demo::domain::DemoReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the run report
///
/// This port abstracts the formatting logic for the different report
/// formats (plain text, JSON).
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Arguments
    /// * `report` - Write counts and read-back text from a completed run
    ///
    /// # Returns
    /// Formatted report content, newline-terminated
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &DemoReport) -> Result<String>;
}
