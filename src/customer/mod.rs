//! Customer records, statements and the dialog request type.

mod loader;
mod request;
mod sample;
mod types;

pub use loader::DataError;
pub use request::{ActionRequest, RequestError};
pub use types::{Customer, CustomerBook, CustomerStatus, StatementLine};
