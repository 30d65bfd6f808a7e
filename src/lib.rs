//! Domain core for a property-rental marketplace.
//!
//! Hosts list properties, tenants submit rental requests against them, and
//! each request moves through an accept/approve/pay/review/complete
//! lifecycle with a one-to-one payment record. The crate owns the business
//! rules and the storage trait seams; the HTTP/JSON surface belongs to the
//! embedding service, which translates the typed errors defined here into
//! status codes.

pub mod config;
pub mod error;
pub mod marketplace;
pub mod telemetry;

pub use error::AppError;
pub use marketplace::payments::{BankDetails, Payment, PaymentError, PaymentLedger, PaymentStore};
pub use marketplace::properties::{Property, PropertyDirectory, PropertyId};
pub use marketplace::requests::{
    LifecycleError, LifecycleFlags, LifecycleStage, NewRentalRequest, RentalRequest,
    RentalRequestStore, RequestId, RequestLifecycleEngine, RequestStatusView, StayValidationError,
    TransitionPolicy, TransitionRefused,
};
pub use marketplace::StoreError;
