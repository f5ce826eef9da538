//! Filename guard applied before any load or save.

use std::fmt;

use crate::{Error, NormalizedPath, Result};

/// The operation a path was chosen for. Only used to word the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Save,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Save => "save",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reject any path whose file name is not exactly `expected`.
///
/// The comparison is case-sensitive.
///
/// # Example
/// ```
/// use ckpe_fs::{NormalizedPath, Operation, verify_file_name, EXPECTED_FILE_NAME};
///
/// let good = NormalizedPath::new("Data/CreationKitPlatformExtended.ini");
/// assert!(verify_file_name(&good, EXPECTED_FILE_NAME, Operation::Load).is_ok());
///
/// let bad = NormalizedPath::new("Data/settings.ini");
/// assert!(verify_file_name(&bad, EXPECTED_FILE_NAME, Operation::Save).is_err());
/// ```
pub fn verify_file_name(path: &NormalizedPath, expected: &str, operation: Operation) -> Result<()> {
    let actual = path.file_name().unwrap_or_default();
    if actual == expected {
        return Ok(());
    }

    tracing::debug!(%path, expected, actual, %operation, "Rejected file name");
    Err(Error::FileNameMismatch {
        operation,
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}
