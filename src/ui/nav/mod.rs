//! Page navigation for the dashboard.
//!
//! Dialog callbacks never touch the app directly: they send a
//! [`NavCommand`] which the app turns into a [`NavIntent`].

mod intent;
mod reducer;
mod state;

pub use intent::{NavCommand, NavIntent};
pub use reducer::NavReducer;
pub use state::{NavState, Page};
