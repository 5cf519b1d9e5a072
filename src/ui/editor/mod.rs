//! Text buffer behind the name editor.

mod intent;
mod reducer;
mod state;

pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::EditorState;
