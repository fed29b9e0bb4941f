use std::fmt;

use super::state::DialogButton;

/// How an open dialog was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    OpenRecord,
    OpenStatement,
    /// Outside click, close control or Esc.
    Dismiss,
}

impl From<DialogButton> for DialogChoice {
    fn from(button: DialogButton) -> Self {
        match button {
            DialogButton::OpenRecord => DialogChoice::OpenRecord,
            DialogButton::OpenStatement => DialogChoice::OpenStatement,
        }
    }
}

type CustomerCallback = Box<dyn FnOnce(&str) + Send>;
type CloseCallback = Box<dyn FnOnce() + Send>;

/// Callbacks supplied by the page that opened the dialog.
///
/// `resolve` consumes the set, so one dialog instance can fire at most one
/// action callback and its close callback exactly once.
pub struct DialogCallbacks {
    on_open_record: Option<CustomerCallback>,
    on_open_statement: Option<CustomerCallback>,
    on_close: CloseCallback,
}

impl DialogCallbacks {
    pub fn new(on_close: impl FnOnce() + Send + 'static) -> Self {
        Self {
            on_open_record: None,
            on_open_statement: None,
            on_close: Box::new(on_close),
        }
    }

    pub fn on_open_record(mut self, callback: impl FnOnce(&str) + Send + 'static) -> Self {
        self.on_open_record = Some(Box::new(callback));
        self
    }

    pub fn on_open_statement(mut self, callback: impl FnOnce(&str) + Send + 'static) -> Self {
        self.on_open_statement = Some(Box::new(callback));
        self
    }

    /// Fire the callback for `choice` (if one was supplied), then close.
    pub fn resolve(self, choice: DialogChoice, customer_id: &str) {
        let Self {
            on_open_record,
            on_open_statement,
            on_close,
        } = self;

        let action = match choice {
            DialogChoice::OpenRecord => on_open_record,
            DialogChoice::OpenStatement => on_open_statement,
            DialogChoice::Dismiss => None,
        };

        match action {
            Some(action) => {
                tracing::debug!(?choice, customer_id, "Action dialog resolved");
                action(customer_id);
            }
            None if choice != DialogChoice::Dismiss => {
                tracing::debug!(?choice, customer_id, "No callback for choice; closing");
            }
            None => {
                tracing::debug!(customer_id, "Action dialog dismissed");
            }
        }

        on_close();
    }
}

impl fmt::Debug for DialogCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogCallbacks")
            .field("on_open_record", &self.on_open_record.is_some())
            .field("on_open_statement", &self.on_open_statement.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<String>>>;

    fn recording(log: &Log, record: bool, statement: bool) -> DialogCallbacks {
        let close_log = Arc::clone(log);
        let mut callbacks =
            DialogCallbacks::new(move || close_log.lock().unwrap().push("close".into()));
        if record {
            let log = Arc::clone(log);
            callbacks = callbacks
                .on_open_record(move |id| log.lock().unwrap().push(format!("record:{id}")));
        }
        if statement {
            let log = Arc::clone(log);
            callbacks = callbacks
                .on_open_statement(move |id| log.lock().unwrap().push(format!("statement:{id}")));
        }
        callbacks
    }

    #[test]
    fn record_then_close() {
        let log = Log::default();
        recording(&log, true, true).resolve(DialogChoice::OpenRecord, "CUST007");
        assert_eq!(*log.lock().unwrap(), vec!["record:CUST007", "close"]);
    }

    #[test]
    fn statement_then_close() {
        let log = Log::default();
        recording(&log, true, true).resolve(DialogChoice::OpenStatement, "CUST007");
        assert_eq!(*log.lock().unwrap(), vec!["statement:CUST007", "close"]);
    }

    #[test]
    fn dismiss_only_closes() {
        let log = Log::default();
        recording(&log, true, true).resolve(DialogChoice::Dismiss, "CUST007");
        assert_eq!(*log.lock().unwrap(), vec!["close"]);
    }

    #[test]
    fn missing_callback_still_closes() {
        let log = Log::default();
        recording(&log, false, true).resolve(DialogChoice::OpenRecord, "CUST007");
        assert_eq!(*log.lock().unwrap(), vec!["close"]);
    }

    #[test]
    fn debug_reports_presence() {
        let callbacks = DialogCallbacks::new(|| {}).on_open_record(|_| {});
        let rendered = format!("{:?}", callbacks);
        assert!(rendered.contains("on_open_record: true"));
        assert!(rendered.contains("on_open_statement: false"));
    }

    #[test]
    fn button_maps_to_choice() {
        assert_eq!(
            DialogChoice::from(DialogButton::OpenStatement),
            DialogChoice::OpenStatement
        );
    }
}
