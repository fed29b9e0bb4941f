use custdesk::ui::mvi::Reducer;
use custdesk::ui::nav::{NavCommand, NavIntent, NavReducer, NavState, Page};

fn customers(rows: usize, selected: usize) -> NavState {
    NavState {
        selected,
        ..NavState::new(rows)
    }
}

#[test]
fn move_down_advances_and_wraps() {
    let state = NavReducer::reduce(customers(3, 0), NavIntent::MoveDown);
    assert_eq!(state.selected, 1);
    let state = NavReducer::reduce(customers(3, 2), NavIntent::MoveDown);
    assert_eq!(state.selected, 0);
}

#[test]
fn move_up_wraps_to_last() {
    let state = NavReducer::reduce(customers(3, 0), NavIntent::MoveUp);
    assert_eq!(state.selected, 2);
}

#[test]
fn moves_ignored_without_rows() {
    let state = NavReducer::reduce(customers(0, 0), NavIntent::MoveDown);
    assert_eq!(state.selected, 0);
    let state = NavReducer::reduce(state, NavIntent::MoveUp);
    assert_eq!(state.selected, 0);
}

#[test]
fn select_out_of_range_ignored() {
    let state = NavReducer::reduce(customers(3, 1), NavIntent::Select(7));
    assert_eq!(state.selected, 1);
    let state = NavReducer::reduce(state, NavIntent::Select(2));
    assert_eq!(state.selected, 2);
}

#[test]
fn open_record_and_back_keep_selection() {
    let state = NavReducer::reduce(
        customers(8, 6),
        NavIntent::OpenRecord {
            customer_id: "CUST007".into(),
        },
    );
    assert_eq!(
        state.page,
        Page::Record {
            customer_id: "CUST007".into()
        }
    );

    let state = NavReducer::reduce(state, NavIntent::Back);
    assert_eq!(state.page, Page::Customers);
    assert_eq!(state.selected, 6);
}

#[test]
fn row_moves_ignored_on_detail_pages() {
    let state = NavReducer::reduce(
        customers(8, 2),
        NavIntent::OpenStatement {
            customer_id: "CUST003".into(),
        },
    );
    let state = NavReducer::reduce(state, NavIntent::MoveDown);
    assert_eq!(state.selected, 2);
}

#[test]
fn command_converts_to_intent() {
    let state = NavReducer::reduce(
        customers(8, 0),
        NavCommand::OpenStatement {
            customer_id: "CUST002".into(),
        }
        .into(),
    );
    assert_eq!(state.page.title(), "Statement");
}
