use super::domain::{Property, PropertyId};
use crate::marketplace::StoreError;

/// Read-side lookup used by the lifecycle engine. The engine consults
/// listings for availability and capacity but never writes them; ownership
/// of property records stays with the listing service.
pub trait PropertyDirectory: Send + Sync {
    fn fetch(&self, id: &PropertyId) -> Result<Option<Property>, StoreError>;

    fn capacity_of(&self, id: &PropertyId) -> Result<Option<u16>, StoreError> {
        Ok(self.fetch(id)?.map(|property| property.capacity))
    }
}
