use super::domain::{RentalRequest, RequestId};
use crate::marketplace::StoreError;

/// Storage abstraction so the lifecycle engine can be exercised in
/// isolation. Implementations are plain read-modify-write stores; any
/// optimistic versioning an embedding service needs hangs off this seam.
pub trait RentalRequestStore: Send + Sync {
    fn insert(&self, request: RentalRequest) -> Result<RentalRequest, StoreError>;
    fn update(&self, request: RentalRequest) -> Result<(), StoreError>;
    fn fetch(&self, id: &RequestId) -> Result<Option<RentalRequest>, StoreError>;
}
