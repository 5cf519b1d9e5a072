use crate::ui::editor::EditorState;
use crate::ui::theme::{INPUT_BG, TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const LABEL: &str = "Your name: ";

/// Labeled text input bound to the editor buffer.
pub struct NameEditor<'a> {
    state: &'a EditorState,
}

impl<'a> NameEditor<'a> {
    pub fn new(state: &'a EditorState) -> Self {
        Self { state }
    }

    pub fn text(&self) -> String {
        format!("{LABEL}{}", self.state.buffer)
    }

    /// Display column of the text cursor, relative to the start of the line.
    ///
    /// Wide glyphs (CJK, emoji) take two columns each.
    pub fn cursor_offset(&self) -> u16 {
        let before_cursor = &self.state.buffer[..self.state.byte_index(self.state.cursor)];
        let column = Span::raw(LABEL).width() + Span::raw(before_cursor).width();
        u16::try_from(column).unwrap_or(u16::MAX)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        // Trailing space keeps the input visible when the buffer is empty.
        let line = Line::from(vec![
            Span::styled(LABEL, Style::default().fg(TEXT)),
            Span::styled(
                format!("{} ", self.state.buffer),
                Style::default().fg(TEXT).bg(INPUT_BG),
            ),
        ]);
        Paragraph::new(line)
    }
}

#[cfg(test)]
mod tests {
    use super::NameEditor;
    use crate::ui::editor::EditorState;

    #[test]
    fn cursor_sits_after_label() {
        let state = EditorState {
            buffer: "Ada".to_string(),
            cursor: 1,
        };
        let editor = NameEditor::new(&state);
        assert_eq!(editor.text(), "Your name: Ada");
        assert_eq!(editor.cursor_offset(), 12);
    }

    #[test]
    fn wide_glyphs_move_cursor_two_columns() {
        let state = EditorState {
            buffer: "日本".to_string(),
            cursor: 2,
        };
        assert_eq!(NameEditor::new(&state).cursor_offset(), 15);

        let state = EditorState {
            buffer: "日本".to_string(),
            cursor: 1,
        };
        assert_eq!(NameEditor::new(&state).cursor_offset(), 13);
    }
}
