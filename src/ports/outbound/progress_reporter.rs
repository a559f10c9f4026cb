/// ProgressReporter port for reporting each step of a run
///
/// This port abstracts step reporting (e.g., to stderr) so that stdout
/// only ever carries the report itself.
pub trait ProgressReporter {
    /// Reports a step message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
