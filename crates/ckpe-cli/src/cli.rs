//! CLI argument parsing using clap derive

use std::path::PathBuf;

use ckpe_core::LineEndingSetting;
use ckpe_ini::ChoiceTable;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// CKPE Config Editor - Edit CreationKitPlatformExtended.ini without losing its comments
#[derive(Parser, Debug)]
#[command(name = "ckpe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// INI file to edit (defaults to the configured file, then
    /// ./CreationKitPlatformExtended.ini)
    #[arg(short, long, global = true, env = "CKPE_FILE")]
    pub file: Option<PathBuf>,

    /// Directory holding the global settings file
    #[arg(long, global = true, env = "CKPE_CONFIG_DIR", hide = true)]
    pub config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List sections and entries with their controls and comments
    Show {
        /// Only show this section
        #[arg(short, long)]
        section: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the value of one entry
    Get {
        section: String,
        key: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Change the value of an existing entry
    ///
    /// The value is checked against the entry's control: checkboxes take
    /// true/false, dropdowns take a name or a code, steppers take an
    /// integer in range.
    ///
    /// Examples:
    ///   ckpe set General bUIDarkTheme true
    ///   ckpe set General nCharset GB2312_CHARSET
    ///   ckpe set General nCharset 1 --dry-run
    Set {
        section: String,
        key: String,
        value: String,

        /// Preview changes without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Add a new entry to the last section
    ///
    /// New entries are written as the last line of the file, so only the
    /// file's last section can receive them.
    Add {
        section: String,
        key: String,
        value: String,

        /// Preview changes without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Edit entries interactively
    Edit,

    /// List the named values a dropdown accepts
    Choices {
        /// Table to list (charset or theme)
        table: ChoiceTable,
    },

    /// Show or change the editor's own settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   ckpe completions bash > ~/.local/share/bash-completion/completions/ckpe
    ///   ckpe completions zsh > ~/.zfunc/_ckpe
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Settings actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved settings and where they come from
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Update the global settings file
    Set {
        /// File to open when --file is not given
        #[arg(long)]
        default_file: Option<PathBuf>,

        /// Line terminator used when saving
        #[arg(long, value_enum)]
        line_ending: Option<LineEndingArg>,
    },
}

/// Line ending choices on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingArg {
    Native,
    Lf,
    Crlf,
}

impl From<LineEndingArg> for LineEndingSetting {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Native => Self::Native,
            LineEndingArg::Lf => Self::Lf,
            LineEndingArg::Crlf => Self::Crlf,
        }
    }
}
