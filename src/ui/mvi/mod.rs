//! Model-View-Intent (MVI) primitives shared by the dashboard's widgets.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: what a view needs to draw itself
//! - **Intent**: a key press, click, or navigation request
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Anything with side effects (callbacks, channels) stays outside the state
//! and is driven by the owner after a reduction.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
