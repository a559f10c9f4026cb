use std::fmt;

/// Permission bits for newly created files: owner read + write, nothing else.
pub const OWNER_READ_WRITE: u32 = 0o600;

/// How an output file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Read and write; required for the file that is read back
    ReadWrite,
    /// Write only
    WriteOnly,
}

impl AccessMode {
    pub fn is_readable(self) -> bool {
        matches!(self, AccessMode::ReadWrite)
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::ReadWrite => write!(f, "read-write"),
            AccessMode::WriteOnly => write!(f, "write-only"),
        }
    }
}
