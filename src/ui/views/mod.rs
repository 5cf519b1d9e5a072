//! The four views of the greeting screen.
//!
//! Each view is built from the current store values and produces a
//! `ratatui` widget. `text()` returns the same content as a plain string.

mod commentary;
mod counter;
mod greeting;
mod name_editor;

pub use commentary::NameCountCommentary;
pub use counter::NameCount;
pub use greeting::Greeting;
pub use name_editor::NameEditor;
