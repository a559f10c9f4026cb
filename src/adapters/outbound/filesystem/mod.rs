/// Filesystem adapters for file I/O operations
mod file_store;
mod presenter;

pub use file_store::{FileSystemHandle, FileSystemStore};
pub use presenter::StdoutPresenter;
