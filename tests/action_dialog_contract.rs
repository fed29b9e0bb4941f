mod common;

use common::{ctrl, key, left_click, CallLog};
use crossterm::event::KeyCode;
use custdesk::customer::{ActionRequest, CustomerBook};
use custdesk::ui::action_dialog::{DialogChoice, DialogLayout};
use custdesk::ui::app::App;
use custdesk::ui::input::{handle_key, handle_mouse};
use custdesk::ui::nav::Page;

fn omar() -> ActionRequest {
    ActionRequest::new("CUST007", Some("Omar Farooq".to_string())).unwrap()
}

/// App with a dialog for CUST007 opened with recording callbacks.
fn open_with(log: &CallLog, record: bool, statement: bool) -> App {
    let mut app = App::new(CustomerBook::sample());
    app.on_resize(100, 30);
    app.open_action_dialog(omar(), log.callbacks(record, statement));
    assert!(app.action_dialog().is_open());
    app
}

#[test]
fn open_record_calls_record_then_close() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, true);
    app.resolve_action_dialog(DialogChoice::OpenRecord);
    assert_eq!(log.calls(), vec!["record:CUST007", "close"]);
    assert!(!app.action_dialog().is_open());
}

#[test]
fn open_statement_calls_statement_then_close() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, true);
    app.resolve_action_dialog(DialogChoice::OpenStatement);
    assert_eq!(log.calls(), vec!["statement:CUST007", "close"]);
}

#[test]
fn clicking_record_button_matches_scenario() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, true);
    let layout = DialogLayout::compute(app.screen_area(), &omar());
    let (_, record) = layout.buttons[0];
    handle_mouse(&mut app, left_click(record.x + 2, record.y));
    assert_eq!(log.calls(), vec!["record:CUST007", "close"]);
}

#[test]
fn clicking_outside_only_closes() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, true);
    handle_mouse(&mut app, left_click(0, 0));
    assert_eq!(log.calls(), vec!["close"]);
    assert!(!app.action_dialog().is_open());
}

#[test]
fn close_control_only_closes() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, true);
    let layout = DialogLayout::compute(app.screen_area(), &omar());
    handle_mouse(&mut app, left_click(layout.close.x, layout.close.y));
    assert_eq!(log.calls(), vec!["close"]);
}

#[test]
fn escape_only_closes() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, true);
    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(log.calls(), vec!["close"]);
}

#[test]
fn clicking_dialog_body_keeps_it_open() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, true);
    let layout = DialogLayout::compute(app.screen_area(), &omar());
    handle_mouse(&mut app, left_click(layout.surface.x + 1, layout.surface.y + 1));
    assert!(log.calls().is_empty());
    assert!(app.action_dialog().is_open());
}

#[test]
fn missing_record_callback_still_closes_once() {
    let log = CallLog::default();
    let mut app = open_with(&log, false, true);
    app.resolve_action_dialog(DialogChoice::OpenRecord);
    assert_eq!(log.calls(), vec!["close"]);
    assert!(!app.action_dialog().is_open());
}

#[test]
fn missing_statement_callback_still_closes_once() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, false);
    app.resolve_action_dialog(DialogChoice::OpenStatement);
    assert_eq!(log.calls(), vec!["close"]);
    assert!(!app.action_dialog().is_open());
}

#[test]
fn ctrl_q_with_dialog_open_closes_once() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, true);
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());
    drop(app);
    assert_eq!(log.calls(), vec!["close"]);
}

#[test]
fn dropping_app_with_dialog_open_closes_once() {
    let log = CallLog::default();
    let app = open_with(&log, true, true);
    drop(app);
    assert_eq!(log.calls(), vec!["close"]);
}

#[test]
fn at_most_one_resolution_per_dialog() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, true);
    app.resolve_action_dialog(DialogChoice::OpenRecord);
    app.resolve_action_dialog(DialogChoice::OpenStatement);
    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(log.calls(), vec!["record:CUST007", "close"]);
}

#[test]
fn reopening_dismisses_previous_instance() {
    let first = CallLog::default();
    let second = CallLog::default();
    let mut app = open_with(&first, true, true);
    let request = ActionRequest::new("CUST002", None).unwrap();
    app.open_action_dialog(request, second.callbacks(true, true));

    assert_eq!(first.calls(), vec!["close"]);
    app.resolve_action_dialog(DialogChoice::OpenStatement);
    assert_eq!(second.calls(), vec!["statement:CUST002", "close"]);
    assert_eq!(first.calls(), vec!["close"]);
}

#[test]
fn keyboard_focus_then_enter_picks_statement() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, true);
    handle_key(&mut app, key(KeyCode::Tab));
    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(log.calls(), vec!["statement:CUST007", "close"]);
}

#[test]
fn hotkey_r_picks_record() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, true);
    handle_key(&mut app, key(KeyCode::Char('r')));
    assert_eq!(log.calls(), vec!["record:CUST007", "close"]);
}

#[test]
fn custom_callbacks_do_not_navigate() {
    let log = CallLog::default();
    let mut app = open_with(&log, true, true);
    app.resolve_action_dialog(DialogChoice::OpenRecord);
    assert_eq!(app.nav().page, Page::Customers);
}
