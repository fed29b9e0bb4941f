use serde::{Deserialize, Serialize};

use crate::customer::request::{ActionRequest, RequestError};

/// Account standing shown in the customers table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Overdue,
    Closed,
}

impl CustomerStatus {
    pub fn label(self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Overdue => "Overdue",
            CustomerStatus::Closed => "Closed",
        }
    }
}

/// A customer row. Balances are display literals, never computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub property: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub status: CustomerStatus,
    pub balance: String,
}

impl Customer {
    /// Build the request the action dialog is opened with.
    pub fn action_request(&self) -> Result<ActionRequest, RequestError> {
        ActionRequest::new(self.id.clone(), Some(self.name.clone()))
    }
}

/// One entry on a customer's payment statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub customer_id: String,
    pub date: String,
    pub description: String,
    pub amount: String,
}

/// The full dataset rendered by the dashboard pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerBook {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub statements: Vec<StatementLine>,
}

impl CustomerBook {
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn get(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == customer_id)
    }

    pub fn at(&self, index: usize) -> Option<&Customer> {
        self.customers.get(index)
    }

    /// Statement lines for a customer, in file order.
    pub fn statement(&self, customer_id: &str) -> Vec<&StatementLine> {
        self.statements
            .iter()
            .filter(|line| line.customer_id == customer_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_statement_filtering() {
        let book = CustomerBook::sample();
        let omar = book.get("CUST007").expect("sample has CUST007");
        assert_eq!(omar.name, "Omar Farooq");
        assert!(book.get("NOPE").is_none());

        let lines = book.statement("CUST007");
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|l| l.customer_id == "CUST007"));
    }

    #[test]
    fn action_request_carries_name() {
        let book = CustomerBook::sample();
        let request = book.at(0).unwrap().action_request().unwrap();
        assert_eq!(request.customer_id(), "CUST001");
        assert!(request.customer_name().is_some());
    }
}
