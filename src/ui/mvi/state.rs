//! Base trait for UI state.

/// Marker trait for view-local state.
///
/// `PartialEq` lets callers detect whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
