//! Terminal front end: views, editor state and the event loop.

pub mod app;
pub mod editor;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod views;
