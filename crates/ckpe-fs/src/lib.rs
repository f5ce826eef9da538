//! Filesystem access for the CKPE config editor
//!
//! Path handling, the target filename guard, text I/O with advisory locking,
//! and TOML settings persistence.

pub mod config;
pub mod constants;
pub mod error;
pub mod guard;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::{EXPECTED_FILE_NAME, EditorPath};
pub use error::{Error, Result};
pub use guard::{Operation, verify_file_name};
pub use path::NormalizedPath;
