//! Base trait for UI state.

/// Marker trait for view state.
///
/// States are cloned rather than mutated in place, compared to detect
/// changes, and default to their "nothing shown" form.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
