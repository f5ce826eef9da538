//! Error types for ckpe-ini

/// Result type for ckpe-ini operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing an in-memory INI model.
///
/// Parsing itself never fails; these cover lookups and value validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Section not found: [{section}]")]
    SectionNotFound { section: String },

    #[error("Entry not found: [{section}] {key}")]
    EntryNotFound { section: String, key: String },

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// New entries go on the last line of the file, which belongs to `last`.
    #[error("Cannot add to [{section}]: new entries are written at the end of the file, inside [{last}]")]
    NotLastSection { section: String, last: String },
}

impl Error {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
