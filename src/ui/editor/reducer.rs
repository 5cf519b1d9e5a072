use crate::ui::editor::intent::EditorIntent;
use crate::ui::editor::state::EditorState;
use crate::ui::mvi::Reducer;

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Load { value } => {
                let cursor = value.chars().count();
                EditorState {
                    buffer: value,
                    cursor,
                }
            }
            EditorIntent::Insert(ch) => {
                let mut state = state;
                let at = state.byte_index(state.cursor);
                state.buffer.insert(at, ch);
                state.cursor += 1;
                state
            }
            EditorIntent::Backspace => {
                if state.cursor == 0 {
                    return state;
                }
                let mut state = state;
                let at = state.byte_index(state.cursor - 1);
                state.buffer.remove(at);
                state.cursor -= 1;
                state
            }
            EditorIntent::Delete => {
                if state.cursor >= state.len() {
                    return state;
                }
                let mut state = state;
                let at = state.byte_index(state.cursor);
                state.buffer.remove(at);
                state
            }
            EditorIntent::MoveLeft => EditorState {
                cursor: state.cursor.saturating_sub(1),
                ..state
            },
            EditorIntent::MoveRight => {
                let cursor = (state.cursor + 1).min(state.len());
                EditorState { cursor, ..state }
            }
            EditorIntent::Home => EditorState { cursor: 0, ..state },
            EditorIntent::End => {
                let cursor = state.len();
                EditorState { cursor, ..state }
            }
        }
    }
}
