use crate::ui::mvi::Intent;

/// Page change requested from a dialog callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    OpenRecord { customer_id: String },
    OpenStatement { customer_id: String },
}

#[derive(Debug, Clone)]
pub enum NavIntent {
    MoveUp,
    MoveDown,
    /// Select a row directly (mouse click).
    Select(usize),
    OpenRecord { customer_id: String },
    OpenStatement { customer_id: String },
    Back,
}

impl Intent for NavIntent {}

impl From<NavCommand> for NavIntent {
    fn from(command: NavCommand) -> Self {
        match command {
            NavCommand::OpenRecord { customer_id } => NavIntent::OpenRecord { customer_id },
            NavCommand::OpenStatement { customer_id } => NavIntent::OpenStatement { customer_id },
        }
    }
}
