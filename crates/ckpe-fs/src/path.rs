//! Separator-agnostic paths for the INI file and settings files.

use std::fmt;
use std::path::{Path, PathBuf};

/// A path stored with `/` separators.
///
/// Creation Kit install paths are usually typed with backslashes, while
/// settings paths come from the platform. Both are kept in one form so the
/// file name guard and log output see the same text; [`to_native`] turns the
/// path back into a `PathBuf` right before touching the disk.
///
/// [`to_native`]: NormalizedPath::to_native
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: path.as_ref().to_string_lossy().replace('\\', "/"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append a relative segment, which may itself use either separator.
    pub fn join(&self, segment: &str) -> Self {
        let base = self.inner.trim_end_matches('/');
        Self {
            inner: format!("{base}/{}", segment.replace('\\', "/")),
        }
    }

    /// Last non-empty component, compared verbatim by the file name guard.
    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .split('/')
            .rfind(|component| !component.is_empty())
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}
