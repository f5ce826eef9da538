//! Comment-preserving INI parsing and writing for the CKPE config editor
//!
//! The [`parser`] turns file lines into [`Section`]s and [`Entry`]s, keeping
//! the comments above each item as its tooltip and the line it came from.
//! The [`writer`] patches only those lines when saving, so everything else in
//! the file survives untouched. [`widget`] decides how each entry should be
//! edited, and [`IniDocument`] ties the pieces together for one loaded file.

pub mod diff;
pub mod document;
pub mod error;
pub mod model;
pub mod parser;
pub mod widget;
pub mod writer;

pub use diff::{ChangeKind, LineChange, LineDiff};
pub use document::IniDocument;
pub use error::{Error, Result};
pub use model::{Entry, Section, validate_key};
pub use parser::{ParsedIni, parse, parse_str};
pub use widget::{Choice, ChoiceTable, WidgetKind, classify};
pub use writer::{LineEnding, render};
