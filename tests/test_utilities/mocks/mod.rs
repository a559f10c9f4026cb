/// Mock implementations for testing
mod mock_file_store;
mod mock_progress_reporter;

pub use mock_file_store::{MockFileHandle, MockFileStore};
pub use mock_progress_reporter::MockProgressReporter;
