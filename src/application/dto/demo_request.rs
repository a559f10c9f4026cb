use crate::file_demo::domain::{
    AccessMode, LiteralPayload, OutputTarget, DEFAULT_FIRST_FILE, DEFAULT_FIRST_PAYLOAD,
    DEFAULT_MAX_READ, DEFAULT_SECOND_FILE, DEFAULT_SECOND_PAYLOAD, MAX_READ_LIMIT,
};
use crate::shared::error::DemoError;
use crate::shared::Result;
use std::path::{Component, Path, PathBuf};

/// DemoRequest - Input to the run use case
///
/// The first target is always opened read-write because it is the one
/// read back; the second is write-only.
#[derive(Debug, Clone)]
pub struct DemoRequest {
    first: OutputTarget,
    second: OutputTarget,
    max_read: usize,
    truncate: bool,
}

impl DemoRequest {
    /// Default run in `working_dir`: file1.txt / file2.txt, 49-byte read,
    /// no truncation
    pub fn new(working_dir: PathBuf) -> Self {
        Self {
            first: OutputTarget::default_first(&working_dir),
            second: OutputTarget::default_second(&working_dir),
            max_read: DEFAULT_MAX_READ,
            truncate: false,
        }
    }

    pub fn builder() -> DemoRequestBuilder {
        DemoRequestBuilder::default()
    }

    /// The file that is written, rewound and read back
    pub fn first(&self) -> &OutputTarget {
        &self.first
    }

    /// The write-only file
    pub fn second(&self) -> &OutputTarget {
        &self.second
    }

    pub fn max_read(&self) -> usize {
        self.max_read
    }

    pub fn truncate(&self) -> bool {
        self.truncate
    }
}

/// Builder for [`DemoRequest`]; every field falls back to the default run.
#[derive(Debug, Default)]
pub struct DemoRequestBuilder {
    working_dir: Option<PathBuf>,
    first_file: Option<String>,
    second_file: Option<String>,
    first_payload: Option<String>,
    second_payload: Option<String>,
    max_read: Option<usize>,
    truncate: bool,
}

impl DemoRequestBuilder {
    pub fn working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    pub fn first_file(mut self, name: impl Into<String>) -> Self {
        self.first_file = Some(name.into());
        self
    }

    pub fn second_file(mut self, name: impl Into<String>) -> Self {
        self.second_file = Some(name.into());
        self
    }

    pub fn first_payload(mut self, text: impl Into<String>) -> Self {
        self.first_payload = Some(text.into());
        self
    }

    pub fn second_payload(mut self, text: impl Into<String>) -> Self {
        self.second_payload = Some(text.into());
        self
    }

    pub fn max_read(mut self, max_read: usize) -> Self {
        self.max_read = Some(max_read);
        self
    }

    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    /// Validates and builds the request
    ///
    /// # Errors
    /// Returns `DemoError::Validation` if a file name or payload is empty,
    /// both file names are the same, or `max_read` is out of range.
    pub fn build(self) -> Result<DemoRequest> {
        let dir = self.working_dir.unwrap_or_else(|| PathBuf::from("."));
        let first_file = self
            .first_file
            .unwrap_or_else(|| DEFAULT_FIRST_FILE.to_string());
        let second_file = self
            .second_file
            .unwrap_or_else(|| DEFAULT_SECOND_FILE.to_string());
        let first_payload = self
            .first_payload
            .unwrap_or_else(|| DEFAULT_FIRST_PAYLOAD.to_string());
        let second_payload = self
            .second_payload
            .unwrap_or_else(|| DEFAULT_SECOND_PAYLOAD.to_string());
        let max_read = self.max_read.unwrap_or(DEFAULT_MAX_READ);

        if first_file.trim().is_empty() || second_file.trim().is_empty() {
            return Err(validation("file names must not be empty"));
        }
        let first_path = dir.join(&first_file);
        let second_path = dir.join(&second_file);
        if resolve(&first_path) == resolve(&second_path) {
            return Err(validation(&format!(
                "both output files resolve to the same name '{}' ('{}' and '{}')",
                resolve(&first_path).display(),
                first_file,
                second_file
            )));
        }
        if first_payload.is_empty() || second_payload.is_empty() {
            return Err(validation("payloads must not be empty"));
        }
        if !(1..=MAX_READ_LIMIT).contains(&max_read) {
            return Err(validation(&format!(
                "max_read must be between 1 and {}, got {}",
                MAX_READ_LIMIT, max_read
            )));
        }

        Ok(DemoRequest {
            first: OutputTarget::new(
                first_path,
                AccessMode::ReadWrite,
                LiteralPayload::new(&first_payload),
            ),
            second: OutputTarget::new(
                second_path,
                AccessMode::WriteOnly,
                LiteralPayload::new(&second_payload),
            ),
            max_read,
            truncate: self.truncate,
        })
    }
}

/// Absolute, lexically normalised form of `path`: `.` dropped and `..`
/// folded into its parent. Symlinks are not followed.
fn resolve(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    resolved.push(component);
                }
            }
            other => resolved.push(other),
        }
    }
    resolved
}

fn validation(message: &str) -> anyhow::Error {
    DemoError::Validation {
        message: message.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let request = DemoRequest::new(PathBuf::from("/work"));
        assert_eq!(request.first().path(), Path::new("/work/file1.txt"));
        assert_eq!(request.second().path(), Path::new("/work/file2.txt"));
        assert_eq!(request.max_read(), 49);
        assert!(!request.truncate());
    }

    #[test]
    fn test_builder_defaults_match_new() {
        let built = DemoRequest::builder().build().unwrap();
        let plain = DemoRequest::new(PathBuf::from("."));
        assert_eq!(built.first(), plain.first());
        assert_eq!(built.second(), plain.second());
        assert_eq!(built.max_read(), plain.max_read());
    }

    #[test]
    fn test_builder_overrides() {
        let request = DemoRequest::builder()
            .working_dir(PathBuf::from("out"))
            .first_file("a.txt")
            .second_file("b.txt")
            .first_payload("alpha")
            .second_payload("beta")
            .max_read(3)
            .truncate(true)
            .build()
            .unwrap();
        assert_eq!(request.first().path(), Path::new("out/a.txt"));
        assert_eq!(request.first().access_mode(), AccessMode::ReadWrite);
        assert_eq!(request.second().access_mode(), AccessMode::WriteOnly);
        assert_eq!(request.first().payload().as_bytes(), b"alpha");
        assert_eq!(request.second().payload().as_bytes(), b"beta");
        assert_eq!(request.max_read(), 3);
        assert!(request.truncate());
    }

    #[test]
    fn test_builder_rejects_same_file_names() {
        let result = DemoRequest::builder()
            .first_file("same.txt")
            .second_file("same.txt")
            .build();
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("same name"));
    }

    #[test]
    fn test_builder_rejects_aliased_file_names() {
        for (first, second) in [
            ("a.txt", "./a.txt"),
            ("a.txt", "sub/../a.txt"),
            ("./sub/./a.txt", "sub/a.txt"),
        ] {
            let result = DemoRequest::builder()
                .first_file(first)
                .second_file(second)
                .build();
            assert!(result.is_err(), "{} and {} should clash", first, second);
            let err = format!("{}", result.unwrap_err());
            assert!(err.contains("same name"));
        }
    }

    #[test]
    fn test_builder_rejects_absolute_name_for_same_target() {
        let dir = std::env::current_dir().unwrap().join("out");
        let absolute = dir.join("a.txt");
        let result = DemoRequest::builder()
            .working_dir(dir)
            .first_file("a.txt")
            .second_file(absolute.to_string_lossy())
            .build();
        assert!(result.is_err());

        let relative_dir = DemoRequest::builder()
            .working_dir(PathBuf::from("out"))
            .first_file("a.txt")
            .second_file(absolute.to_string_lossy())
            .build();
        assert!(relative_dir.is_err());
    }

    #[test]
    fn test_builder_accepts_distinct_names_in_subdirectories() {
        let request = DemoRequest::builder()
            .first_file("a/file.txt")
            .second_file("b/../c/file.txt")
            .build()
            .unwrap();
        assert_eq!(request.first().path(), Path::new("./a/file.txt"));
    }

    #[test]
    fn test_resolve_folds_dot_components() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve(Path::new("./x/../y/./z")), cwd.join("y/z"));
        assert_eq!(resolve(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
    }

    #[test]
    fn test_builder_rejects_empty_values() {
        assert!(DemoRequest::builder().first_file("  ").build().is_err());
        assert!(DemoRequest::builder().second_payload("").build().is_err());
    }

    #[test]
    fn test_builder_rejects_max_read_out_of_range() {
        assert!(DemoRequest::builder().max_read(0).build().is_err());
        assert!(DemoRequest::builder()
            .max_read(MAX_READ_LIMIT + 1)
            .build()
            .is_err());
        assert!(DemoRequest::builder()
            .max_read(MAX_READ_LIMIT)
            .build()
            .is_ok());
    }
}
