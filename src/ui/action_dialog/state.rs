use crate::customer::ActionRequest;
use crate::ui::mvi::UiState;

/// The two action buttons, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogButton {
    #[default]
    OpenRecord,
    OpenStatement,
}

impl DialogButton {
    pub const ALL: [DialogButton; 2] = [DialogButton::OpenRecord, DialogButton::OpenStatement];

    pub fn label(self) -> &'static str {
        match self {
            DialogButton::OpenRecord => "Open Customer Record",
            DialogButton::OpenStatement => "Open Statement",
        }
    }

    /// Wraps around with two buttons, so next and previous coincide.
    pub fn next(self) -> Self {
        match self {
            DialogButton::OpenRecord => DialogButton::OpenStatement,
            DialogButton::OpenStatement => DialogButton::OpenRecord,
        }
    }

    pub fn prev(self) -> Self {
        self.next()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionDialogState {
    #[default]
    Closed,
    Open {
        request: ActionRequest,
        focused: DialogButton,
    },
}

impl UiState for ActionDialogState {}

impl ActionDialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn request(&self) -> Option<&ActionRequest> {
        match self {
            Self::Open { request, .. } => Some(request),
            Self::Closed => None,
        }
    }

    pub fn focused(&self) -> Option<DialogButton> {
        match self {
            Self::Open { focused, .. } => Some(*focused),
            Self::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_is_default() {
        assert_eq!(ActionDialogState::default(), ActionDialogState::Closed);
        assert!(!ActionDialogState::Closed.is_open());
        assert_eq!(ActionDialogState::Closed.request(), None);
    }

    #[test]
    fn focus_wraps() {
        assert_eq!(DialogButton::OpenRecord.next(), DialogButton::OpenStatement);
        assert_eq!(DialogButton::OpenStatement.next(), DialogButton::OpenRecord);
        assert_eq!(DialogButton::OpenRecord.prev(), DialogButton::OpenStatement);
    }
}
