//! Reactive stores behind the greeting screen.
//!
//! ```text
//! NameStore ──→ NameChangeCounter ──→ CommentarySelector
//! ```
//!
//! Propagation is synchronous and single-threaded: by the time
//! [`NameStore::set`] returns, every derived store holds its new value.

mod cell;
mod commentary;
mod counter;
mod name;

pub use cell::{NotifyPolicy, Store, SubscriptionId};
pub use commentary::{commentary_for, CommentarySelector, COMMENTS, FALLBACK_COMMENT};
pub use counter::NameChangeCounter;
pub use name::NameStore;
