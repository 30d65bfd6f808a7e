use super::domain::Payment;
use crate::marketplace::requests::RequestId;
use crate::marketplace::StoreError;

/// Storage abstraction for payment companions, keyed by request id.
pub trait PaymentStore: Send + Sync {
    fn insert(&self, payment: Payment) -> Result<Payment, StoreError>;
    fn update(&self, payment: Payment) -> Result<(), StoreError>;
    fn fetch(&self, request_id: &RequestId) -> Result<Option<Payment>, StoreError>;
}
