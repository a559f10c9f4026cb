/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, stdout).
pub mod file_store;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use file_store::{FileHandle, FileStore, OpenedFile};
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
