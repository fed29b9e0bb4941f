use crate::ui::mvi::Reducer;

use super::intent::ActionDialogIntent;
use super::state::ActionDialogState;

pub struct ActionDialogReducer;

impl Reducer for ActionDialogReducer {
    type State = ActionDialogState;
    type Intent = ActionDialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ActionDialogIntent::Open { request } => ActionDialogState::Open {
                request,
                focused: Default::default(),
            },
            ActionDialogIntent::FocusNext => match state {
                ActionDialogState::Open { request, focused } => ActionDialogState::Open {
                    request,
                    focused: focused.next(),
                },
                other => other,
            },
            ActionDialogIntent::FocusPrev => match state {
                ActionDialogState::Open { request, focused } => ActionDialogState::Open {
                    request,
                    focused: focused.prev(),
                },
                other => other,
            },
            ActionDialogIntent::Focus(button) => match state {
                ActionDialogState::Open { request, .. } => ActionDialogState::Open {
                    request,
                    focused: button,
                },
                other => other,
            },
            ActionDialogIntent::Close => ActionDialogState::Closed,
        }
    }
}
