use crate::application::dto::{DemoRequest, DemoResponse};
use crate::file_demo::domain::{DemoReport, OutputTarget, ReadBuffer, WrittenFile};
use crate::ports::outbound::{FileHandle, FileStore, OpenedFile, ProgressReporter};
use crate::shared::error::DemoError;
use crate::shared::Result;

/// RunDemoUseCase - opens two files, writes a payload to each, rewinds the
/// first and reads it back into a bounded buffer
///
/// # Type Parameters
/// * `FS` - FileStore implementation
/// * `PR` - ProgressReporter implementation
pub struct RunDemoUseCase<FS, PR> {
    file_store: FS,
    progress_reporter: PR,
}

impl<FS, PR> RunDemoUseCase<FS, PR>
where
    FS: FileStore,
    PR: ProgressReporter,
{
    /// Creates a new RunDemoUseCase with injected dependencies
    pub fn new(file_store: FS, progress_reporter: PR) -> Self {
        Self {
            file_store,
            progress_reporter,
        }
    }

    /// Executes the run
    ///
    /// Handles are owned by this call and closed when it returns, on the
    /// success path and on every error path alike.
    ///
    /// # Errors
    /// * `DemoError::OpenAborted` if either file cannot be opened; nothing
    ///   has been written and files created by this call are removed again
    /// * `DemoError::Write`, `DemoError::Seek`, `DemoError::Read` for the
    ///   later steps
    pub fn execute(&self, request: DemoRequest) -> Result<DemoResponse> {
        // Step 1: Open both files, abort before any write if either fails
        let (mut first, mut second) = self.open_both(&request)?;
        let created_files = [(&first, request.first()), (&second, request.second())]
            .iter()
            .filter(|(opened, _)| opened.created)
            .map(|(_, target)| target.path().to_path_buf())
            .collect();

        // Step 2: Write each payload
        let first_written = self.write_payload(&mut first.handle, request.first())?;
        let second_written = self.write_payload(&mut second.handle, request.second())?;
        drop(second);

        // Step 3: Rewind the read-write file and read it back
        self.progress_reporter.report(&format!(
            "⏪ Rewinding {}",
            first.handle.path().display()
        ));
        first.handle.rewind()?;

        let mut buffer = ReadBuffer::with_max_read(request.max_read());
        let bytes_read = first.handle.read_into(&mut buffer)?;
        self.progress_reporter.report(&format!(
            "📖 Read {} byte(s) back (limit {})",
            bytes_read,
            buffer.max_read()
        ));

        let report = DemoReport::new(
            vec![
                WrittenFile::new(request.first().path().to_path_buf(), first_written),
                WrittenFile::new(request.second().path().to_path_buf(), second_written),
            ],
            bytes_read,
            buffer.as_text().into_owned(),
        );

        self.progress_reporter.report_completion("✅ Run complete");
        Ok(DemoResponse::new(report, created_files))
    }

    /// Opens both targets in order, first then second
    ///
    /// Both opens are attempted so the error names every file that failed.
    fn open_both(
        &self,
        request: &DemoRequest,
    ) -> Result<(OpenedFile<FS::Handle>, OpenedFile<FS::Handle>)> {
        let first = self.open_target(request.first(), request.truncate());
        let second = self.open_target(request.second(), request.truncate());

        match (first, second) {
            (Ok(first), Ok(second)) => Ok((first, second)),
            (first, second) => {
                let mut failures = Vec::new();
                for (target, outcome) in [(request.first(), first), (request.second(), second)] {
                    match outcome {
                        Ok(opened) => self.discard(target, opened),
                        Err(err) => failures.push(err.to_string()),
                    }
                }
                for failure in &failures {
                    self.progress_reporter.report_error(&format!("❌ {}", failure));
                }
                Err(DemoError::OpenAborted {
                    count: failures.len(),
                    details: failures.join("\n\n"),
                }
                .into())
            }
        }
    }

    fn open_target(
        &self,
        target: &OutputTarget,
        truncate: bool,
    ) -> Result<OpenedFile<FS::Handle>> {
        self.progress_reporter.report(&format!(
            "📂 Opening {} ({})",
            target.path().display(),
            target.access_mode()
        ));
        self.file_store
            .open_or_create(target.path(), target.access_mode(), truncate)
    }

    /// Closes a handle from an aborted run and removes the file if the run
    /// created it
    fn discard(&self, target: &OutputTarget, opened: OpenedFile<FS::Handle>) {
        let OpenedFile { handle, created } = opened;
        drop(handle);
        if !created {
            return;
        }
        if let Err(err) = self.file_store.remove(target.path()) {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: could not remove {}: {}",
                target.path().display(),
                err
            ));
        }
    }

    fn write_payload(&self, handle: &mut FS::Handle, target: &OutputTarget) -> Result<usize> {
        let written = handle.write_payload(target.payload().as_bytes())?;
        self.progress_reporter.report(&format!(
            "✏️  Wrote {} byte(s) to {}",
            written,
            handle.path().display()
        ));
        Ok(written)
    }
}
