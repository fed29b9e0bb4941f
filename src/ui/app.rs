use crate::customer::{ActionRequest, CustomerBook};
use crate::ui::action_dialog::{
    ActionDialogIntent, ActionDialogReducer, ActionDialogState, DialogCallbacks, DialogChoice,
};
use crate::ui::layout::body_rect;
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavCommand, NavIntent, NavReducer, NavState};
use ratatui::layout::Rect;
use std::sync::mpsc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    book: CustomerBook,
    /// Current page and row selection (MVI pattern).
    nav: NavState,
    /// Action dialog view state (MVI pattern).
    action_dialog: ActionDialogState,
    /// Callbacks of the open dialog (resource, managed outside MVI).
    dialog_callbacks: Option<DialogCallbacks>,
    nav_tx: mpsc::Sender<NavCommand>,
    nav_rx: mpsc::Receiver<NavCommand>,
}

impl App {
    pub fn new(book: CustomerBook) -> Self {
        let (nav_tx, nav_rx) = mpsc::channel();
        Self {
            should_quit: false,
            size: None,
            nav: NavState::new(book.len()),
            book,
            action_dialog: ActionDialogState::default(),
            dialog_callbacks: None,
            nav_tx,
            nav_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Quitting counts as a dismiss for an open dialog.
    pub fn request_quit(&mut self) {
        self.resolve_action_dialog(DialogChoice::Dismiss);
        self.should_quit = true;
    }

    pub fn book(&self) -> &CustomerBook {
        &self.book
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn action_dialog(&self) -> &ActionDialogState {
        &self.action_dialog
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Whole terminal area as of the last resize.
    pub fn screen_area(&self) -> Rect {
        let (cols, rows) = self.size.unwrap_or((80, 24));
        Rect::new(0, 0, cols, rows)
    }

    pub fn body_area(&self) -> Rect {
        body_rect(self.screen_area())
    }

    pub fn on_tick(&mut self) {
        self.drain_nav_commands();
    }

    pub fn dispatch_nav(&mut self, intent: NavIntent) {
        dispatch_mvi!(self, nav, NavReducer, intent);
    }

    pub fn dispatch_dialog(&mut self, intent: ActionDialogIntent) {
        dispatch_mvi!(self, action_dialog, ActionDialogReducer, intent);
    }

    /// Show a fresh dialog. An already open dialog is dismissed first so its
    /// close callback still runs exactly once.
    pub fn open_action_dialog(&mut self, request: ActionRequest, callbacks: DialogCallbacks) {
        if self.action_dialog.is_open() {
            self.resolve_action_dialog(DialogChoice::Dismiss);
        }
        tracing::debug!(customer_id = request.customer_id(), "Opening action dialog");
        self.dialog_callbacks = Some(callbacks);
        self.dispatch_dialog(ActionDialogIntent::Open { request });
    }

    /// Close the dialog and report `choice` to its callbacks.
    pub fn resolve_action_dialog(&mut self, choice: DialogChoice) {
        let Some(request) = self.action_dialog.request().cloned() else {
            return;
        };
        self.dispatch_dialog(ActionDialogIntent::Close);
        if let Some(callbacks) = self.dialog_callbacks.take() {
            callbacks.resolve(choice, request.customer_id());
        }
        self.drain_nav_commands();
    }

    /// Open the action dialog for the highlighted customer row.
    pub fn activate_selected(&mut self) {
        let Some(customer) = self.book.at(self.nav.selected) else {
            return;
        };
        let request = match customer.action_request() {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(name = %customer.name, "Cannot open actions: {}", err);
                return;
            }
        };
        let callbacks = self.customer_page_callbacks(request.customer_id());
        self.open_action_dialog(request, callbacks);
    }

    fn customer_page_callbacks(&self, customer_id: &str) -> DialogCallbacks {
        let record_tx = self.nav_tx.clone();
        let statement_tx = self.nav_tx.clone();
        let closed_id = customer_id.to_string();

        DialogCallbacks::new(move || {
            tracing::debug!(customer_id = %closed_id, "Customer actions closed");
        })
        .on_open_record(move |customer_id| {
            if let Err(err) = record_tx.send(NavCommand::OpenRecord {
                customer_id: customer_id.to_string(),
            }) {
                tracing::warn!(command = ?err.0, "Navigation command dropped (receiver gone)");
            }
        })
        .on_open_statement(move |customer_id| {
            if let Err(err) = statement_tx.send(NavCommand::OpenStatement {
                customer_id: customer_id.to_string(),
            }) {
                tracing::warn!(command = ?err.0, "Navigation command dropped (receiver gone)");
            }
        })
    }

    fn drain_nav_commands(&mut self) {
        while let Ok(command) = self.nav_rx.try_recv() {
            tracing::info!(?command, "Navigating");
            self.dispatch_nav(command.into());
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.resolve_action_dialog(DialogChoice::Dismiss);
    }
}
