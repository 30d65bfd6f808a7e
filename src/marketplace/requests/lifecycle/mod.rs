//! Lifecycle engine for rental requests: submission, flag transitions, and
//! stay-term updates.
//!
//! Every mutation is a synchronous read-modify-write against the request
//! store; failures are typed and surfaced immediately, never retried.

mod transitions;
mod validation;

pub use transitions::{LifecycleEvent, TransitionPolicy, TransitionRefused};
pub use validation::StayValidationError;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use tracing::{info, warn};

use super::domain::{LifecycleFlags, NewRentalRequest, RentalRequest, RequestId};
use super::repository::RentalRequestStore;
use crate::marketplace::payments::PaymentStore;
use crate::marketplace::properties::{PropertyDirectory, PropertyId};
use crate::marketplace::StoreError;

/// Errors raised by the lifecycle engine. Not-found conditions and
/// validation failures stay distinct so the embedding service can map them
/// to 404 and 400 responses.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("rental request {0} not found")]
    RequestNotFound(RequestId),
    #[error("property {0} not found")]
    PropertyNotFound(PropertyId),
    #[error("property {0} is not available for new requests")]
    PropertyUnavailable(PropertyId),
    #[error("no payment opened for request {0}")]
    PaymentMissing(RequestId),
    #[error(transparent)]
    Validation(#[from] StayValidationError),
    #[error(transparent)]
    Refused(#[from] TransitionRefused),
    #[error(transparent)]
    Store(#[from] StoreError),
}

static REQUEST_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_request_id() -> RequestId {
    let id = REQUEST_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RequestId(format!("req-{id:06}"))
}

/// Service enforcing the rental-request lifecycle over its storage seams.
///
/// The property directory is read-only from here; the payment store is read
/// for the strict policy's paid check. All writes go through the request
/// store.
pub struct RequestLifecycleEngine<R, P, M> {
    requests: Arc<R>,
    directory: Arc<P>,
    payments: Arc<M>,
    policy: TransitionPolicy,
}

impl<R, P, M> RequestLifecycleEngine<R, P, M>
where
    R: RentalRequestStore + 'static,
    P: PropertyDirectory + 'static,
    M: PaymentStore + 'static,
{
    pub fn new(requests: Arc<R>, directory: Arc<P>, payments: Arc<M>) -> Self {
        Self::with_policy(requests, directory, payments, TransitionPolicy::default())
    }

    pub fn with_policy(
        requests: Arc<R>,
        directory: Arc<P>,
        payments: Arc<M>,
        policy: TransitionPolicy,
    ) -> Self {
        Self {
            requests,
            directory,
            payments,
            policy,
        }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Open a request against an available listing. The amount is fixed
    /// here as nightly rate times nights and survives later detail updates.
    pub fn submit(&self, submission: NewRentalRequest) -> Result<RentalRequest, LifecycleError> {
        let property = self
            .directory
            .fetch(&submission.property_id)?
            .ok_or_else(|| LifecycleError::PropertyNotFound(submission.property_id.clone()))?;

        if !property.available {
            return Err(LifecycleError::PropertyUnavailable(property.id));
        }

        validation::validate_stay(
            Local::now().date_naive(),
            submission.arrival_date,
            submission.departure_date,
            property.capacity,
            submission.people_count,
        )?;

        let nights = (submission.departure_date - submission.arrival_date).num_days() as u32;
        let request = RentalRequest {
            id: next_request_id(),
            property_id: submission.property_id,
            requester_email: submission.requester_email,
            requested_at: Utc::now(),
            arrival_date: submission.arrival_date,
            departure_date: submission.departure_date,
            people_count: submission.people_count,
            amount: property.nightly_rate.saturating_mul(nights),
            flags: LifecycleFlags::default(),
        };

        let stored = self.requests.insert(request)?;
        info!(request = %stored.id, property = %stored.property_id, "rental request submitted");
        Ok(stored)
    }

    pub fn accept(&self, id: &RequestId) -> Result<RentalRequest, LifecycleError> {
        self.apply(id, LifecycleEvent::Accept)
    }

    pub fn reject(&self, id: &RequestId) -> Result<RentalRequest, LifecycleError> {
        self.apply(id, LifecycleEvent::Reject)
    }

    pub fn cancel(&self, id: &RequestId) -> Result<RentalRequest, LifecycleError> {
        self.apply(id, LifecycleEvent::Cancel)
    }

    pub fn approve(&self, id: &RequestId) -> Result<RentalRequest, LifecycleError> {
        self.apply(id, LifecycleEvent::Approve)
    }

    /// Mark the request paid. Under the strict policy the payment companion
    /// must already be opened; the check reads the payment store.
    pub fn pay(&self, id: &RequestId) -> Result<RentalRequest, LifecycleError> {
        let request = self.load(id)?;
        self.check(&request, LifecycleEvent::Pay)?;
        if self.policy == TransitionPolicy::Strict && self.payments.fetch(id)?.is_none() {
            return Err(LifecycleError::PaymentMissing(id.clone()));
        }
        self.finish(request, LifecycleEvent::Pay)
    }

    pub fn complete(&self, id: &RequestId) -> Result<RentalRequest, LifecycleError> {
        self.apply(id, LifecycleEvent::Complete)
    }

    /// Landlord's review of the renter.
    pub fn review_renter(&self, id: &RequestId) -> Result<RentalRequest, LifecycleError> {
        self.apply(id, LifecycleEvent::ReviewRenter)
    }

    /// Tenant's review of the landlord.
    pub fn review_landlord(&self, id: &RequestId) -> Result<RentalRequest, LifecycleError> {
        self.apply(id, LifecycleEvent::ReviewLandlord)
    }

    /// Tenant's review of the property itself.
    pub fn review_property(&self, id: &RequestId) -> Result<RentalRequest, LifecycleError> {
        self.apply(id, LifecycleEvent::ReviewProperty)
    }

    /// Re-validate and replace the stay terms on an existing request.
    /// Mutates exactly the arrival date, departure date, and party size;
    /// the amount keeps its submission-time value.
    pub fn update_rental_details(
        &self,
        id: &RequestId,
        arrival_date: NaiveDate,
        departure_date: NaiveDate,
        people_count: u16,
    ) -> Result<RentalRequest, LifecycleError> {
        let mut request = self.load(id)?;

        let capacity = self
            .directory
            .capacity_of(&request.property_id)?
            .ok_or_else(|| LifecycleError::PropertyNotFound(request.property_id.clone()))?;

        validation::validate_stay(
            Local::now().date_naive(),
            arrival_date,
            departure_date,
            capacity,
            people_count,
        )?;

        request.arrival_date = arrival_date;
        request.departure_date = departure_date;
        request.people_count = people_count;
        self.requests.update(request.clone())?;
        Ok(request)
    }

    fn apply(&self, id: &RequestId, event: LifecycleEvent) -> Result<RentalRequest, LifecycleError> {
        let request = self.load(id)?;
        self.check(&request, event)?;
        self.finish(request, event)
    }

    fn load(&self, id: &RequestId) -> Result<RentalRequest, LifecycleError> {
        self.requests
            .fetch(id)?
            .ok_or_else(|| LifecycleError::RequestNotFound(id.clone()))
    }

    fn check(&self, request: &RentalRequest, event: LifecycleEvent) -> Result<(), LifecycleError> {
        if self.policy == TransitionPolicy::Permissive {
            return Ok(());
        }

        transitions::check_transition(request, event).map_err(|refused| {
            warn!(
                request = %request.id,
                stage = %refused.stage,
                event = %refused.event,
                "transition refused"
            );
            refused.into()
        })
    }

    fn finish(
        &self,
        mut request: RentalRequest,
        event: LifecycleEvent,
    ) -> Result<RentalRequest, LifecycleError> {
        event.apply_to(&mut request.flags);
        self.requests.update(request.clone())?;
        Ok(request)
    }
}
