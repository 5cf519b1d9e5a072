use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
    pub buffer: String,
    /// Cursor position in chars, `0..=buffer.chars().count()`.
    pub cursor: usize,
}

impl UiState for EditorState {}

impl EditorState {
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Byte offset of the char at `index`, or the buffer length past the end.
    pub(crate) fn byte_index(&self, index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.buffer.len())
    }
}
