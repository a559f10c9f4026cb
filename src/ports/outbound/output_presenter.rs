use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts where the formatted report (or the open-failure
/// diagnostic) ends up.
pub trait OutputPresenter {
    /// Presents the content as-is
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
