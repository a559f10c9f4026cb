use crate::file_demo::domain::{AccessMode, ReadBuffer};
use crate::shared::Result;
use std::path::Path;

/// A handle returned by [`FileStore::open_or_create`]
///
/// `created` is true when the open brought the file into existence, which
/// lets the caller undo the creation if the run is aborted.
#[derive(Debug)]
pub struct OpenedFile<H> {
    pub handle: H,
    pub created: bool,
}

/// FileHandle port: one open file with its own read/write offset
///
/// Implementations release the underlying resource on drop; there is no
/// explicit close.
pub trait FileHandle {
    /// Path the handle was opened from
    fn path(&self) -> &Path;

    /// Writes the whole payload at the current offset
    ///
    /// # Returns
    /// The number of bytes transferred, equal to `payload.len()` on success
    ///
    /// # Errors
    /// Returns `DemoError::Write` if the underlying write fails
    fn write_payload(&mut self, payload: &[u8]) -> Result<usize>;

    /// Moves the offset back to the start of the file
    ///
    /// # Returns
    /// The new offset (always 0 on success)
    ///
    /// # Errors
    /// Returns `DemoError::Seek` if the file cannot be repositioned
    fn rewind(&mut self) -> Result<u64>;

    /// Reads from the current offset into the readable part of `buffer`
    ///
    /// Stops when the buffer's readable region is full or at end of file,
    /// then commits the count to the buffer.
    ///
    /// # Returns
    /// The number of bytes read, possibly zero
    ///
    /// # Errors
    /// Returns `DemoError::Read` if the underlying read fails
    fn read_into(&mut self, buffer: &mut ReadBuffer) -> Result<usize>;
}

/// FileStore port for opening and removing output files
pub trait FileStore {
    type Handle: FileHandle;

    /// Opens `path` with the given access mode, creating it with owner
    /// read+write permission if absent
    ///
    /// Existing contents are kept unless `truncate` is set.
    ///
    /// # Errors
    /// Returns `DemoError::Open` if the path cannot be opened or created
    fn open_or_create(
        &self,
        path: &Path,
        access_mode: AccessMode,
        truncate: bool,
    ) -> Result<OpenedFile<Self::Handle>>;

    /// Deletes a file created by this run
    fn remove(&self, path: &Path) -> Result<()>;
}
