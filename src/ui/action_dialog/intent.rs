use crate::customer::ActionRequest;
use crate::ui::mvi::Intent;

use super::state::DialogButton;

#[derive(Debug, Clone)]
pub enum ActionDialogIntent {
    /// Show a fresh dialog instance for this request.
    Open { request: ActionRequest },
    FocusNext,
    FocusPrev,
    /// Mouse hover or hotkey put focus on a specific button.
    Focus(DialogButton),
    Close,
}

impl Intent for ActionDialogIntent {}
