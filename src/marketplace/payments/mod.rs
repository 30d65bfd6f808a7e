//! Payment companions of rental requests.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{BankDetails, Payment};
pub use repository::PaymentStore;
pub use service::{PaymentError, PaymentLedger};
