//! Base trait for intents.

/// Marker trait for actions fed into a [`Reducer`](super::Reducer),
/// typically decoded from a key press.
pub trait Intent: Send + 'static {}
