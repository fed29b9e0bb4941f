use crate::ui::mvi::Reducer;

use super::intent::NavIntent;
use super::state::{NavState, Page};

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::MoveUp if state.on_customers() && state.row_count > 0 => {
                let selected = if state.selected == 0 {
                    state.row_count - 1
                } else {
                    state.selected - 1
                };
                NavState { selected, ..state }
            }
            NavIntent::MoveDown if state.on_customers() && state.row_count > 0 => {
                let selected = if state.selected + 1 >= state.row_count {
                    0
                } else {
                    state.selected + 1
                };
                NavState { selected, ..state }
            }
            NavIntent::Select(index) if state.on_customers() && index < state.row_count => {
                NavState {
                    selected: index,
                    ..state
                }
            }
            NavIntent::OpenRecord { customer_id } => NavState {
                page: Page::Record { customer_id },
                ..state
            },
            NavIntent::OpenStatement { customer_id } => NavState {
                page: Page::Statement { customer_id },
                ..state
            },
            NavIntent::Back => NavState {
                page: Page::Customers,
                ..state
            },
            _ => state,
        }
    }
}
