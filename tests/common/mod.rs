//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use custdesk::ui::action_dialog::DialogCallbacks;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Ordered record of callback invocations, e.g. `["record:CUST007", "close"]`.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    fn push(&self, entry: String) {
        self.0.lock().push(entry);
    }

    /// Callbacks that record into this log. Action callbacks are only
    /// installed when requested.
    pub fn callbacks(&self, record: bool, statement: bool) -> DialogCallbacks {
        let close_log = self.clone();
        let mut callbacks = DialogCallbacks::new(move || close_log.push("close".into()));
        if record {
            let log = self.clone();
            callbacks = callbacks.on_open_record(move |id| log.push(format!("record:{id}")));
        }
        if statement {
            let log = self.clone();
            callbacks =
                callbacks.on_open_statement(move |id| log.push(format!("statement:{id}")));
        }
        callbacks
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Write `content` to `<tempdir>/<name>` and return both.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
