//! Model-View-Intent (MVI) primitives for local UI state.
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ State ──→ View
//! ```
//!
//! Shared application data lives in [`crate::store`]; MVI state is for
//! view-local concerns such as the editor's text buffer and cursor.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
