use crate::config::UiConfig;
use crate::customer::CustomerBook;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::{setup_terminal, TerminalModes};
use std::io;
use std::sync::mpsc::RecvTimeoutError;

pub fn run(config: &UiConfig, book: CustomerBook) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(TerminalModes {
        mouse: config.mouse,
    })?;
    let tick_rate = config.tick_rate();
    let mut app = App::new(book);
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(customers = app.book().len(), "Dashboard started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Dashboard exiting");
    drop(events);
    drop(guard);
    Ok(())
}
