use thiserror::Error;

/// Errors that can occur when building an [`ActionRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Customer id must not be empty")]
    EmptyCustomerId,
}

/// Identifier/name pair handed to the action dialog when a customer row is
/// activated. Lives only as long as the dialog is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    customer_id: String,
    customer_name: Option<String>,
}

impl ActionRequest {
    pub fn new(
        customer_id: impl Into<String>,
        customer_name: Option<String>,
    ) -> Result<Self, RequestError> {
        let customer_id = customer_id.into();
        if customer_id.trim().is_empty() {
            return Err(RequestError::EmptyCustomerId);
        }
        let customer_name = customer_name.filter(|name| !name.trim().is_empty());
        Ok(Self {
            customer_id,
            customer_name,
        })
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    /// "Name (ID)" summary shown under the dialog title, if a name is known.
    pub fn identity_summary(&self) -> Option<String> {
        self.customer_name
            .as_ref()
            .map(|name| format!("{} ({})", name, self.customer_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_rejected() {
        assert_eq!(
            ActionRequest::new("", None),
            Err(RequestError::EmptyCustomerId)
        );
        assert_eq!(
            ActionRequest::new("   ", Some("Omar Farooq".into())),
            Err(RequestError::EmptyCustomerId)
        );
    }

    #[test]
    fn blank_name_counts_as_absent() {
        let request = ActionRequest::new("CUST001", Some("  ".into())).unwrap();
        assert_eq!(request.customer_name(), None);
        assert_eq!(request.identity_summary(), None);
    }

    #[test]
    fn identity_summary_has_name_and_id() {
        let request = ActionRequest::new("CUST007", Some("Omar Farooq".into())).unwrap();
        assert_eq!(
            request.identity_summary().as_deref(),
            Some("Omar Farooq (CUST007)")
        );
    }
}
