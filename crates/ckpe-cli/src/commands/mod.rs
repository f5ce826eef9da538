//! Command implementations for ckpe-cli

pub mod choices;
pub mod config;
pub mod diff;
pub mod edit;
pub mod show;

pub use choices::run_choices;
pub use config::{run_config_set, run_config_show};
pub use edit::{run_add, run_set};
pub use show::{run_get, run_show};
