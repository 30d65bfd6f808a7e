//! Rental requests and their lifecycle.
//!
//! A request references a property and a requester, carries the stay terms,
//! and progresses through independent boolean status flags. The
//! [`lifecycle`] module owns every mutation.

pub mod domain;
pub mod lifecycle;
pub mod repository;

#[cfg(test)]
mod tests;

pub use domain::{
    LifecycleFlags, LifecycleStage, NewRentalRequest, RentalRequest, RequestId, RequestStatusView,
};
pub use lifecycle::{
    LifecycleError, LifecycleEvent, RequestLifecycleEngine, StayValidationError, TransitionPolicy,
    TransitionRefused,
};
pub use repository::RentalRequestStore;
