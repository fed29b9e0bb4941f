use crate::ui::action_dialog::{
    ActionDialogIntent, DialogButton, DialogChoice, DialogHit, DialogLayout,
};
use crate::ui::app::App;
use crate::ui::nav::NavIntent;
use crate::ui::pages::customer_row_at;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.action_dialog().is_open() {
        handle_dialog_key(app, key);
        return;
    }

    if app.nav().on_customers() {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.dispatch_nav(NavIntent::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => app.dispatch_nav(NavIntent::MoveDown),
            KeyCode::Enter => app.activate_selected(),
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        }
    } else if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
        app.dispatch_nav(NavIntent::Back);
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.resolve_action_dialog(DialogChoice::Dismiss),
        KeyCode::Tab | KeyCode::Right | KeyCode::Down => {
            app.dispatch_dialog(ActionDialogIntent::FocusNext)
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Up => {
            app.dispatch_dialog(ActionDialogIntent::FocusPrev)
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(focused) = app.action_dialog().focused() {
                app.resolve_action_dialog(focused.into());
            }
        }
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'r') => {
            app.resolve_action_dialog(DialogButton::OpenRecord.into())
        }
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'s') => {
            app.resolve_action_dialog(DialogButton::OpenStatement.into())
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if let Some(request) = app.action_dialog().request() {
        let layout = DialogLayout::compute(app.screen_area(), request);
        match layout.hit(mouse.column, mouse.row) {
            DialogHit::Button(button) => app.resolve_action_dialog(button.into()),
            DialogHit::Close | DialogHit::Outside => {
                app.resolve_action_dialog(DialogChoice::Dismiss)
            }
            DialogHit::Surface => {}
        }
        return;
    }

    if !app.nav().on_customers() {
        return;
    }
    let nav = app.nav();
    if let Some(index) = customer_row_at(
        app.body_area(),
        nav.selected,
        nav.row_count,
        mouse.column,
        mouse.row,
    ) {
        app.dispatch_nav(NavIntent::Select(index));
        app.activate_selected();
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
