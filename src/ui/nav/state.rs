use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Customers,
    Record {
        customer_id: String,
    },
    Statement {
        customer_id: String,
    },
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Customers => "Customers",
            Page::Record { .. } => "Customer Record",
            Page::Statement { .. } => "Statement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub page: Page,
    /// Highlighted row on the customers page; kept while viewing a detail page.
    pub selected: usize,
    pub row_count: usize,
}

impl UiState for NavState {}

impl NavState {
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            ..Self::default()
        }
    }

    pub fn on_customers(&self) -> bool {
        self.page == Page::Customers
    }
}
