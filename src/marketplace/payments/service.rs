use std::sync::Arc;

use tracing::info;

use super::domain::{BankDetails, Payment};
use super::repository::PaymentStore;
use crate::marketplace::properties::Property;
use crate::marketplace::requests::{RentalRequest, RequestId};
use crate::marketplace::StoreError;

/// Errors raised by the payment ledger.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment for request {0} already opened")]
    AlreadyOpened(RequestId),
    #[error("no payment opened for request {0}")]
    NotFound(RequestId),
    #[error("bank details for request {0} already recorded")]
    DetailsAlreadyRecorded(RequestId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Service owning the payment companions. Records are created and updated
/// independently of the lifecycle engine, which only reads them.
pub struct PaymentLedger<M> {
    store: Arc<M>,
}

impl<M> PaymentLedger<M>
where
    M: PaymentStore + 'static,
{
    pub fn new(store: Arc<M>) -> Self {
        Self { store }
    }

    /// Open the companion record once a request becomes payable, copying
    /// the rental price from the listing.
    pub fn open_for(
        &self,
        request: &RentalRequest,
        property: &Property,
    ) -> Result<Payment, PaymentError> {
        if self.store.fetch(&request.id)?.is_some() {
            return Err(PaymentError::AlreadyOpened(request.id.clone()));
        }

        let payment = Payment {
            request_id: request.id.clone(),
            rental_price: property.nightly_rate,
            bank: None,
            account_number: None,
        };

        let stored = self.store.insert(payment)?;
        info!(request = %stored.request_id, "payment record opened");
        Ok(stored)
    }

    /// Fill in the tenant's bank coordinates; allowed exactly once.
    pub fn record_bank_details(
        &self,
        request_id: &RequestId,
        details: BankDetails,
    ) -> Result<Payment, PaymentError> {
        let mut payment = self
            .store
            .fetch(request_id)?
            .ok_or_else(|| PaymentError::NotFound(request_id.clone()))?;

        if payment.has_details() {
            return Err(PaymentError::DetailsAlreadyRecorded(request_id.clone()));
        }

        payment.bank = Some(details.bank);
        payment.account_number = Some(details.account_number);
        self.store.update(payment.clone())?;
        Ok(payment)
    }

    /// Read used by the lifecycle engine's strict paid check.
    pub fn payment_for(&self, request_id: &RequestId) -> Result<Option<Payment>, PaymentError> {
        Ok(self.store.fetch(request_id)?)
    }
}
