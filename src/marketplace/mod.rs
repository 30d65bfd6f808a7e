//! Marketplace domain: the property directory, the rental-request lifecycle,
//! and the payment companions.

pub mod payments;
pub mod properties;
pub mod requests;

pub use payments::{Payment, PaymentError, PaymentLedger};
pub use properties::{Property, PropertyDirectory, PropertyId};
pub use requests::{RentalRequest, RequestId, RequestLifecycleEngine};

/// Failure modes shared by the storage collaborators. "Record absent" is
/// expressed through `Option` on the fetch side and promoted to a typed
/// not-found error by the services.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
