//! Base trait for intents.

/// Marker trait for intent objects: user input or a navigation request
/// that a reducer turns into a new state.
pub trait Intent: Send + 'static {}
