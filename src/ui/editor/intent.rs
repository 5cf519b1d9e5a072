use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorIntent {
    /// Replace the buffer, cursor at the end. Used on startup and on Esc.
    Load { value: String },
    Insert(char),
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    Home,
    End,
}

impl Intent for EditorIntent {}
