use super::AccessMode;
use std::path::{Path, PathBuf};

pub const DEFAULT_FIRST_FILE: &str = "file1.txt";
pub const DEFAULT_SECOND_FILE: &str = "file2.txt";
pub const DEFAULT_FIRST_PAYLOAD: &str = "Hello World";
pub const DEFAULT_SECOND_PAYLOAD: &str = "Hello World 2";

/// LiteralPayload value object: the exact bytes written to one file.
///
/// No terminator is stored, so `len()` is the number of bytes requested
/// from the write call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralPayload(Vec<u8>);

impl LiteralPayload {
    pub fn new(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One file the run writes to: where it lives, how it is opened, and what
/// goes into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    path: PathBuf,
    access_mode: AccessMode,
    payload: LiteralPayload,
}

impl OutputTarget {
    pub fn new(path: PathBuf, access_mode: AccessMode, payload: LiteralPayload) -> Self {
        Self {
            path,
            access_mode,
            payload,
        }
    }

    /// `file1.txt` in `dir`, read-write, holding "Hello World"
    pub fn default_first(dir: &Path) -> Self {
        Self::new(
            dir.join(DEFAULT_FIRST_FILE),
            AccessMode::ReadWrite,
            LiteralPayload::new(DEFAULT_FIRST_PAYLOAD),
        )
    }

    /// `file2.txt` in `dir`, write-only, holding "Hello World 2"
    pub fn default_second(dir: &Path) -> Self {
        Self::new(
            dir.join(DEFAULT_SECOND_FILE),
            AccessMode::WriteOnly,
            LiteralPayload::new(DEFAULT_SECOND_PAYLOAD),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn access_mode(&self) -> AccessMode {
        self.access_mode
    }

    pub fn payload(&self) -> &LiteralPayload {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_length_excludes_terminator() {
        assert_eq!(LiteralPayload::new(DEFAULT_FIRST_PAYLOAD).len(), 11);
        assert_eq!(LiteralPayload::new(DEFAULT_SECOND_PAYLOAD).len(), 13);
        assert!(!LiteralPayload::new("x").as_bytes().contains(&0));
    }

    #[test]
    fn test_empty_payload() {
        assert!(LiteralPayload::new("").is_empty());
    }

    #[test]
    fn test_default_targets() {
        let dir = Path::new("/work");
        let first = OutputTarget::default_first(dir);
        assert_eq!(first.path(), Path::new("/work/file1.txt"));
        assert_eq!(first.access_mode(), AccessMode::ReadWrite);
        assert_eq!(first.payload().as_bytes(), b"Hello World");

        let second = OutputTarget::default_second(dir);
        assert_eq!(second.path(), Path::new("/work/file2.txt"));
        assert_eq!(second.access_mode(), AccessMode::WriteOnly);
        assert_eq!(second.payload().as_bytes(), b"Hello World 2");
    }
}
