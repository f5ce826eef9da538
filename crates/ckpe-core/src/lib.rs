//! Editor session and settings for the CKPE config editor
//!
//! [`EditorSession`] owns the loaded document and applies the filename guard,
//! value validation and the save latch around it. [`config`] resolves the
//! editor's own settings from TOML files.

pub mod config;
pub mod error;
pub mod latch;
pub mod outcome;
pub mod session;

pub use config::{EditorSettings, LineEndingSetting, SettingsLayer, SettingsResolver};
pub use error::{Error, Result};
pub use latch::{SaveGuard, SaveLatch};
pub use outcome::{Notifier, Outcome, OutcomeStatus};
pub use session::{EditorSession, SaveStatus};
