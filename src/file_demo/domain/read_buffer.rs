use crate::shared::error::DemoError;
use crate::shared::Result;
use std::borrow::Cow;

/// Default number of readable bytes (a 50-byte buffer with one slot kept
/// for the terminator).
pub const DEFAULT_MAX_READ: usize = 49;

/// Upper bound accepted for `max_read` from the CLI or config.
pub const MAX_READ_LIMIT: usize = 4096;

/// Fixed-capacity buffer that receives the read-back contents.
///
/// Capacity is `max_read + 1`. Reads only ever see the first `max_read`
/// bytes, and the terminator is written at `bytes_read`, so it always
/// lands strictly inside the buffer.
#[derive(Debug, Clone)]
pub struct ReadBuffer {
    data: Vec<u8>,
    len: usize,
}

impl ReadBuffer {
    pub fn with_max_read(max_read: usize) -> Self {
        Self {
            data: vec![0; max_read + 1],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn max_read(&self) -> usize {
        self.capacity() - 1
    }

    /// The region a read may fill; excludes the terminator slot.
    pub fn readable_mut(&mut self) -> &mut [u8] {
        let max = self.max_read();
        &mut self.data[..max]
    }

    /// Records how many bytes the read produced and terminates the data
    /// right after them.
    pub fn commit(&mut self, bytes_read: usize) -> Result<()> {
        if bytes_read > self.max_read() {
            return Err(DemoError::Validation {
                message: format!(
                    "read of {} byte(s) exceeds buffer limit of {}",
                    bytes_read,
                    self.max_read()
                ),
            }
            .into());
        }
        self.len = bytes_read;
        self.data[bytes_read] = 0;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the terminator byte placed by the last `commit`.
    pub fn terminator_index(&self) -> usize {
        self.len
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The data read, as text: everything up to the first NUL or the end of
    /// the read, whichever comes first. Invalid UTF-8 is replaced.
    pub fn as_text(&self) -> Cow<'_, str> {
        let bytes = self.bytes();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        String::from_utf8_lossy(&bytes[..end])
    }
}

impl Default for ReadBuffer {
    fn default() -> Self {
        Self::with_max_read(DEFAULT_MAX_READ)
    }
}
