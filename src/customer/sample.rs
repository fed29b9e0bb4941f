//! Built-in sample dataset used when no data file is configured.

use crate::customer::types::{Customer, CustomerBook, CustomerStatus, StatementLine};

const CUSTOMERS: &[(&str, &str, &str, &str, &str, CustomerStatus, &str)] = &[
    ("CUST001", "Aisha Rahman", "Unit 4B, Palm Court", "+971 50 123 4401", "aisha.rahman@example.com", CustomerStatus::Active, "AED 0.00"),
    ("CUST002", "Daniel Okafor", "Villa 12, Green Meadows", "+971 50 123 4402", "d.okafor@example.com", CustomerStatus::Overdue, "AED 14,250.00"),
    ("CUST003", "Priya Nair", "Apt 1203, Marina Heights", "+971 50 123 4403", "priya.nair@example.com", CustomerStatus::Active, "AED 2,100.00"),
    ("CUST004", "Lucas Moreau", "Shop 7, Harbour Walk", "+971 50 123 4404", "lucas.moreau@example.com", CustomerStatus::Active, "AED 0.00"),
    ("CUST005", "Fatima Al Sayed", "Townhouse 3, Desert Rose", "+971 50 123 4405", "fatima.alsayed@example.com", CustomerStatus::Closed, "AED 0.00"),
    ("CUST006", "Chen Wei", "Apt 806, Creek View", "+971 50 123 4406", "chen.wei@example.com", CustomerStatus::Overdue, "AED 6,480.00"),
    ("CUST007", "Omar Farooq", "Villa 21, Palm Gardens", "+971 50 123 4407", "omar.farooq@example.com", CustomerStatus::Active, "AED 3,750.00"),
    ("CUST008", "Sofia Rossi", "Office 502, Business Bay Tower", "+971 50 123 4408", "sofia.rossi@example.com", CustomerStatus::Active, "AED 980.00"),
];

const STATEMENTS: &[(&str, &str, &str, &str)] = &[
    ("CUST002", "2024-01-05", "Quarterly rent Q1", "AED 12,000.00"),
    ("CUST002", "2024-02-10", "Late payment fee", "AED 250.00"),
    ("CUST002", "2024-03-01", "Maintenance charge", "AED 2,000.00"),
    ("CUST003", "2024-02-01", "Service charge", "AED 2,100.00"),
    ("CUST006", "2024-01-15", "Monthly rent January", "AED 6,480.00"),
    ("CUST007", "2024-01-01", "Annual rent instalment 1 of 4", "AED 30,000.00"),
    ("CUST007", "2024-01-03", "Payment received, thank you", "-AED 30,000.00"),
    ("CUST007", "2024-02-14", "Chiller and facilities fee", "AED 3,750.00"),
    ("CUST008", "2024-03-20", "Parking bay rental", "AED 980.00"),
];

impl CustomerBook {
    pub fn sample() -> Self {
        let customers = CUSTOMERS
            .iter()
            .map(|(id, name, property, phone, email, status, balance)| Customer {
                id: id.to_string(),
                name: name.to_string(),
                property: property.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
                status: *status,
                balance: balance.to_string(),
            })
            .collect();
        let statements = STATEMENTS
            .iter()
            .map(|(customer_id, date, description, amount)| StatementLine {
                customer_id: customer_id.to_string(),
                date: date.to_string(),
                description: description.to_string(),
                amount: amount.to_string(),
            })
            .collect();
        Self {
            customers,
            statements,
        }
    }
}
