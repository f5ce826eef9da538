//! Error types for ckpe-core

/// Result type for ckpe-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ckpe-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A save or edit was requested before any file was loaded
    #[error("No configuration file is loaded")]
    NoFileLoaded,

    /// The platform has no config directory for global settings
    #[error("No config directory available for global settings")]
    NoConfigDir,

    /// Model lookup or value validation error from ckpe-ini
    #[error(transparent)]
    Ini(#[from] ckpe_ini::Error),

    /// Filesystem error from ckpe-fs
    #[error(transparent)]
    Fs(#[from] ckpe_fs::Error),
}

impl Error {
    /// Whether the error is a rejected input rather than a failed operation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Ini(
                ckpe_ini::Error::InvalidValue { .. }
                    | ckpe_ini::Error::InvalidKey { .. }
                    | ckpe_ini::Error::NotLastSection { .. }
            ) | Self::Fs(ckpe_fs::Error::FileNameMismatch { .. })
        )
    }
}
