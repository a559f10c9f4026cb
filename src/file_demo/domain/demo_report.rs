use std::path::{Path, PathBuf};

/// Bytes written to one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    path: PathBuf,
    bytes_written: usize,
}

impl WrittenFile {
    pub fn new(path: PathBuf, bytes_written: usize) -> Self {
        Self {
            path,
            bytes_written,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }
}

/// Outcome of one complete run: the write counts in the order the files
/// were written, and the text recovered from the read-back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    written: Vec<WrittenFile>,
    bytes_read: usize,
    text: String,
}

impl DemoReport {
    pub fn new(written: Vec<WrittenFile>, bytes_read: usize, text: String) -> Self {
        Self {
            written,
            bytes_read,
            text,
        }
    }

    pub fn written(&self) -> &[WrittenFile] {
        &self.written
    }

    pub fn bytes_read(&self) -> usize {
        self.bytes_read
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn total_bytes_written(&self) -> usize {
        self.written.iter().map(WrittenFile::bytes_written).sum()
    }
}
