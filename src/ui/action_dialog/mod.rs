//! Customer action dialog.
//!
//! Offers "Open Customer Record" and "Open Statement" for one customer and
//! reports the user's choice through caller-supplied callbacks.
//!
//! - `state.rs` - Open/Closed state and the focused button
//! - `intent.rs` - Focus and visibility actions
//! - `reducer.rs` - State transitions
//! - `callbacks.rs` - The caller's callbacks, consumed on resolve
//! - `dialog.rs` - Layout, hit testing and rendering

mod callbacks;
mod dialog;
mod intent;
mod reducer;
mod state;

pub use callbacks::{DialogCallbacks, DialogChoice};
pub use dialog::{
    button_style, dialog_content, render_action_dialog, ButtonVariant, DialogContent, DialogHit,
    DialogLayout,
};
pub use intent::ActionDialogIntent;
pub use reducer::ActionDialogReducer;
pub use state::{ActionDialogState, DialogButton};
