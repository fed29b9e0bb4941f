use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::customer::types::CustomerBook;

/// Errors that can occur when loading a customer data file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse data file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Data validation failed: {message}")]
    ValidationError { message: String },
}

impl CustomerBook {
    /// Load a dataset of `[[customers]]` and `[[statements]]` tables.
    pub fn load_from(path: &Path) -> Result<Self, DataError> {
        let content = fs::read_to_string(path).map_err(|e| DataError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let book: CustomerBook = toml::from_str(&content).map_err(|e| DataError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        book.validate()?;
        tracing::info!(
            path = %path.display(),
            customers = book.customers.len(),
            statements = book.statements.len(),
            "Loaded customer data"
        );
        Ok(book)
    }

    /// Checks:
    /// - every customer id is non-empty and unique
    /// - every statement line refers to a known customer
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::new();
        for customer in &self.customers {
            if customer.id.trim().is_empty() {
                return Err(DataError::ValidationError {
                    message: format!("Customer '{}' has an empty id", customer.name),
                });
            }
            if !seen.insert(customer.id.as_str()) {
                return Err(DataError::ValidationError {
                    message: format!("Duplicate customer id '{}'", customer.id),
                });
            }
        }

        if let Some(line) = self
            .statements
            .iter()
            .find(|line| !seen.contains(line.customer_id.as_str()))
        {
            return Err(DataError::ValidationError {
                message: format!(
                    "Statement line '{}' refers to unknown customer '{}'",
                    line.description, line.customer_id
                ),
            });
        }

        Ok(())
    }
}
