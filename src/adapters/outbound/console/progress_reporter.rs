use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting steps to stderr
///
/// Step and completion messages are only shown in verbose mode. Errors and
/// warnings are always shown. Nothing is ever written to stdout, which is
/// reserved for the report.
pub struct StderrProgressReporter {
    verbose: bool,
}

impl StderrProgressReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        if self.verbose {
            eprintln!();
            eprintln!("{}", message);
        }
    }
}
