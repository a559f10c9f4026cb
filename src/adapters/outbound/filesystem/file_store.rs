use crate::file_demo::domain::{AccessMode, ReadBuffer, OWNER_READ_WRITE};
use crate::ports::outbound::{FileHandle, FileStore, OpenedFile};
use crate::shared::error::DemoError;
use crate::shared::Result;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// FileSystemStore adapter opening real files through std::fs
///
/// New files get owner read+write permission (0o600) on Unix.
pub struct FileSystemStore;

impl FileSystemStore {
    pub fn new() -> Self {
        Self
    }

    fn options(access_mode: AccessMode, truncate: bool) -> OpenOptions {
        let mut options = OpenOptions::new();
        options
            .read(access_mode.is_readable())
            .write(true)
            .truncate(truncate);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(OWNER_READ_WRITE);
        }
        options
    }
}

impl Default for FileSystemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for FileSystemStore {
    type Handle = FileSystemHandle;

    fn open_or_create(
        &self,
        path: &Path,
        access_mode: AccessMode,
        truncate: bool,
    ) -> Result<OpenedFile<FileSystemHandle>> {
        let options = Self::options(access_mode, truncate);

        // create_new first so we know whether this call made the file
        let (file, created) = match options.clone().create_new(true).open(path) {
            Ok(file) => (file, true),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                let file = options.open(path).map_err(|e| open_error(path, e))?;
                (file, false)
            }
            Err(e) => return Err(open_error(path, e)),
        };

        Ok(OpenedFile {
            handle: FileSystemHandle {
                path: path.to_path_buf(),
                file,
            },
            created,
        })
    }

    fn remove(&self, path: &Path) -> Result<()> {
        fs::remove_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to remove {}: {}", path.display(), e))
    }
}

fn open_error(path: &Path, e: io::Error) -> anyhow::Error {
    DemoError::Open {
        path: path.to_path_buf(),
        details: e.to_string(),
    }
    .into()
}

/// An open std::fs::File; closed when dropped
#[derive(Debug)]
pub struct FileSystemHandle {
    path: PathBuf,
    file: File,
}

impl FileHandle for FileSystemHandle {
    fn path(&self) -> &Path {
        &self.path
    }

    fn write_payload(&mut self, payload: &[u8]) -> Result<usize> {
        self.file
            .write_all(payload)
            .map_err(|e| DemoError::Write {
                path: self.path.clone(),
                details: e.to_string(),
            })?;
        Ok(payload.len())
    }

    fn rewind(&mut self) -> Result<u64> {
        let offset = self
            .file
            .seek(SeekFrom::Start(0))
            .map_err(|e| DemoError::Seek {
                path: self.path.clone(),
                details: e.to_string(),
            })?;
        Ok(offset)
    }

    fn read_into(&mut self, buffer: &mut ReadBuffer) -> Result<usize> {
        let mut total = 0;
        let region = buffer.readable_mut();
        while total < region.len() {
            match self.file.read(&mut region[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(DemoError::Read {
                        path: self.path.clone(),
                        details: e.to_string(),
                    }
                    .into())
                }
            }
        }
        buffer.commit(total)?;
        Ok(total)
    }
}
