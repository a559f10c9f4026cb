use crate::file_demo::domain::DemoReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    files: Vec<File>,
    bytes_read: usize,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct File {
    path: String,
    bytes_written: usize,
}

/// JsonFormatter adapter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &DemoReport) -> Result<String> {
        let document = Report {
            files: report
                .written()
                .iter()
                .map(|file| File {
                    path: file.path().display().to_string(),
                    bytes_written: file.bytes_written(),
                })
                .collect(),
            bytes_read: report.bytes_read(),
            text: report.text(),
        };

        let mut json = serde_json::to_string_pretty(&document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_demo::domain::WrittenFile;
    use std::path::PathBuf;

    #[test]
    fn test_format_structure() {
        let report = DemoReport::new(
            vec![
                WrittenFile::new(PathBuf::from("file1.txt"), 11),
                WrittenFile::new(PathBuf::from("file2.txt"), 13),
            ],
            11,
            "Hello World".to_string(),
        );

        let output = JsonFormatter::new().format(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["files"][0]["path"], "file1.txt");
        assert_eq!(value["files"][0]["bytes_written"], 11);
        assert_eq!(value["files"][1]["path"], "file2.txt");
        assert_eq!(value["files"][1]["bytes_written"], 13);
        assert_eq!(value["bytes_read"], 11);
        assert_eq!(value["text"], "Hello World");
        assert!(output.ends_with("}\n"));
    }

    #[test]
    fn test_format_escapes_text() {
        let report = DemoReport::new(vec![], 7, "say \"hi\"".to_string());
        let output = JsonFormatter::default().format(&report).unwrap();
        assert!(output.contains(r#""text": "say \"hi\"""#));
    }
}
