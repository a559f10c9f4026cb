//! hello-files - write two files, rewind one, read it back
//!
//! Opens (or creates) two files, writes a literal payload to each, rewinds
//! the first and reads it back into a bounded buffer, following hexagonal
//! architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`file_demo`): access modes, payloads, the read buffer, the report
//! - **Application Layer** (`application`): the run use case, DTOs, factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): std::fs, stderr, and formatter implementations
//! - **Shared** (`shared`): error types and the Result alias
//!
//! # Example
//!
//! ```no_run
//! use hello_files::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = RunDemoUseCase::new(FileSystemStore::new(), StderrProgressReporter::new(false));
//! let response = use_case.execute(DemoRequest::new(PathBuf::from(".")))?;
//!
//! let output = TextFormatter::new().format(&response.report)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod file_demo;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemHandle, FileSystemStore, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{DemoRequest, DemoResponse, OutputFormat};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::RunDemoUseCase;
    pub use crate::file_demo::domain::{
        AccessMode, DemoReport, LiteralPayload, OutputTarget, ReadBuffer, WrittenFile,
    };
    pub use crate::ports::outbound::{
        FileHandle, FileStore, OpenedFile, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
