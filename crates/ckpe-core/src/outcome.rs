//! User-facing results of editor operations

use serde::Serialize;

use crate::Error;

/// How an operation ended, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    /// The operation ran and failed (I/O, missing entry, ...)
    Failure,
    /// The input was rejected before anything ran
    Invalid,
}

/// A message for the notification collaborator: pass/fail plus text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub status: OutcomeStatus,
    pub title: String,
    pub message: String,
}

impl Outcome {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Failure,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn invalid(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Invalid,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Describe an error.
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Fs(ckpe_fs::Error::FileNameMismatch { .. }) => {
                Self::invalid("Invalid Filename", error.to_string())
            }
            Error::Ini(ckpe_ini::Error::InvalidValue { .. }) => {
                Self::invalid("Invalid Value", error.to_string())
            }
            Error::Ini(ckpe_ini::Error::InvalidKey { .. }) => {
                Self::invalid("Invalid Key", error.to_string())
            }
            Error::Ini(ckpe_ini::Error::NotLastSection { .. }) => {
                Self::invalid("Invalid Section", error.to_string())
            }
            Error::Fs(_) => Self::failure("File Error", error.to_string()),
            _ => Self::failure("Error", error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}

/// Shows outcomes to the user.
pub trait Notifier {
    fn notify(&self, outcome: &Outcome);
}
