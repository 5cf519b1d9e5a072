//! # hello-stores
//!
//! A greeting screen driven by three small reactive stores:
//!
//! ```text
//! NameStore ──→ NameChangeCounter ──→ CommentarySelector
//!     │                 │                      │
//!  Greeting,         NameCount           NameCountCommentary
//!  NameEditor
//! ```
//!
//! [`ui::app::App`] is the composition root; it builds the stores, seeds
//! the name, and hands current values to the views on every redraw.

pub mod cli;
pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
