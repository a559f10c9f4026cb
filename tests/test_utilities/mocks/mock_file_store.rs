use hello_files::prelude::*;
use hello_files::shared::error::DemoError;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    files: HashMap<PathBuf, Vec<u8>>,
    open_handles: usize,
    closed_handles: usize,
}

/// In-memory FileStore that can be told to fail specific operations
#[derive(Default, Clone)]
pub struct MockFileStore {
    state: Arc<Mutex<State>>,
    unopenable: HashSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
    failing_reads: bool,
}

impl MockFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &[u8]) -> Self {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(PathBuf::from(path), content.to_vec());
        self
    }

    pub fn with_unopenable(mut self, path: &str) -> Self {
        self.unopenable.insert(PathBuf::from(path));
        self
    }

    pub fn with_failing_write(mut self, path: &str) -> Self {
        self.failing_writes.insert(PathBuf::from(path));
        self
    }

    pub fn with_failing_reads(mut self) -> Self {
        self.failing_reads = true;
        self
    }

    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.state.lock().unwrap().files.get(Path::new(path)).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }

    /// Handles currently alive (opened and not yet dropped)
    pub fn live_handles(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.open_handles - state.closed_handles
    }
}

pub struct MockFileHandle {
    path: PathBuf,
    state: Arc<Mutex<State>>,
    offset: usize,
    fail_write: bool,
    fail_read: bool,
}

impl Drop for MockFileHandle {
    fn drop(&mut self) {
        self.state.lock().unwrap().closed_handles += 1;
    }
}

impl FileHandle for MockFileHandle {
    fn path(&self) -> &Path {
        &self.path
    }

    fn write_payload(&mut self, payload: &[u8]) -> Result<usize> {
        if self.fail_write {
            return Err(DemoError::Write {
                path: self.path.clone(),
                details: "No space left on device".to_string(),
            }
            .into());
        }
        let mut state = self.state.lock().unwrap();
        let data = state.files.get_mut(&self.path).unwrap();
        let end = self.offset + payload.len();
        if data.len() < end {
            data.resize(end, 0);
        }
        data[self.offset..end].copy_from_slice(payload);
        self.offset = end;
        Ok(payload.len())
    }

    fn rewind(&mut self) -> Result<u64> {
        self.offset = 0;
        Ok(0)
    }

    fn read_into(&mut self, buffer: &mut ReadBuffer) -> Result<usize> {
        if self.fail_read {
            return Err(DemoError::Read {
                path: self.path.clone(),
                details: "Input/output error".to_string(),
            }
            .into());
        }
        let state = self.state.lock().unwrap();
        let data = &state.files[&self.path];
        let available = data.len().saturating_sub(self.offset);
        let n = available.min(buffer.max_read());
        buffer.readable_mut()[..n].copy_from_slice(&data[self.offset..self.offset + n]);
        buffer.commit(n)?;
        self.offset += n;
        Ok(n)
    }
}

impl FileStore for MockFileStore {
    type Handle = MockFileHandle;

    fn open_or_create(
        &self,
        path: &Path,
        _access_mode: AccessMode,
        truncate: bool,
    ) -> Result<OpenedFile<MockFileHandle>> {
        if self.unopenable.contains(path) {
            return Err(DemoError::Open {
                path: path.to_path_buf(),
                details: "Permission denied".to_string(),
            }
            .into());
        }
        let mut state = self.state.lock().unwrap();
        let created = !state.files.contains_key(path);
        let data = state.files.entry(path.to_path_buf()).or_default();
        if truncate {
            data.clear();
        }
        state.open_handles += 1;
        Ok(OpenedFile {
            handle: MockFileHandle {
                path: path.to_path_buf(),
                state: Arc::clone(&self.state),
                offset: 0,
                fail_write: self.failing_writes.contains(path),
                fail_read: self.failing_reads,
            },
            created,
        })
    }

    fn remove(&self, path: &Path) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| anyhow::anyhow!("{} does not exist", path.display()))
    }
}
