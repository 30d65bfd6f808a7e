use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Duration, Local, NaiveDate};

use crate::marketplace::payments::{Payment, PaymentStore};
use crate::marketplace::properties::{Property, PropertyDirectory, PropertyId};
use crate::marketplace::requests::domain::{NewRentalRequest, RentalRequest, RequestId};
use crate::marketplace::requests::lifecycle::{RequestLifecycleEngine, TransitionPolicy};
use crate::marketplace::requests::repository::RentalRequestStore;
use crate::marketplace::StoreError;

pub(super) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(super) fn property() -> Property {
    Property {
        id: PropertyId("prop-villa-01".to_string()),
        owner_email: "owner@lettings.test".to_string(),
        street_address: "12 Harbour Row".to_string(),
        nightly_rate: 90,
        capacity: 4,
        available: true,
    }
}

pub(super) fn submission() -> NewRentalRequest {
    NewRentalRequest {
        property_id: property().id,
        requester_email: "tenant@lettings.test".to_string(),
        arrival_date: today() + Duration::days(7),
        departure_date: today() + Duration::days(10),
        people_count: 2,
    }
}

#[derive(Default)]
pub(super) struct MemoryRequestStore {
    records: Mutex<HashMap<RequestId, RentalRequest>>,
}

impl MemoryRequestStore {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("request store mutex poisoned").len()
    }
}

impl RentalRequestStore for MemoryRequestStore {
    fn insert(&self, request: RentalRequest) -> Result<RentalRequest, StoreError> {
        let mut guard = self.records.lock().expect("request store mutex poisoned");
        if guard.contains_key(&request.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(request.id.clone(), request.clone());
        Ok(request)
    }

    fn update(&self, request: RentalRequest) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("request store mutex poisoned");
        guard.insert(request.id.clone(), request);
        Ok(())
    }

    fn fetch(&self, id: &RequestId) -> Result<Option<RentalRequest>, StoreError> {
        let guard = self.records.lock().expect("request store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default)]
pub(super) struct MemoryDirectory {
    properties: Mutex<HashMap<PropertyId, Property>>,
}

impl MemoryDirectory {
    pub(super) fn with_property(property: Property) -> Self {
        let directory = Self::default();
        directory
            .properties
            .lock()
            .expect("directory mutex poisoned")
            .insert(property.id.clone(), property);
        directory
    }
}

impl PropertyDirectory for MemoryDirectory {
    fn fetch(&self, id: &PropertyId) -> Result<Option<Property>, StoreError> {
        let guard = self.properties.lock().expect("directory mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Directory double that is permanently offline.
pub(super) struct UnavailableDirectory;

impl PropertyDirectory for UnavailableDirectory {
    fn fetch(&self, _id: &PropertyId) -> Result<Option<Property>, StoreError> {
        Err(StoreError::Unavailable("directory offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryPaymentStore {
    payments: Mutex<HashMap<RequestId, Payment>>,
}

impl PaymentStore for MemoryPaymentStore {
    fn insert(&self, payment: Payment) -> Result<Payment, StoreError> {
        let mut guard = self.payments.lock().expect("payment store mutex poisoned");
        if guard.contains_key(&payment.request_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(payment.request_id.clone(), payment.clone());
        Ok(payment)
    }

    fn update(&self, payment: Payment) -> Result<(), StoreError> {
        let mut guard = self.payments.lock().expect("payment store mutex poisoned");
        guard.insert(payment.request_id.clone(), payment);
        Ok(())
    }

    fn fetch(&self, request_id: &RequestId) -> Result<Option<Payment>, StoreError> {
        let guard = self.payments.lock().expect("payment store mutex poisoned");
        Ok(guard.get(request_id).cloned())
    }
}

pub(super) type TestEngine =
    RequestLifecycleEngine<MemoryRequestStore, MemoryDirectory, MemoryPaymentStore>;

pub(super) fn engine() -> (TestEngine, Arc<MemoryRequestStore>, Arc<MemoryPaymentStore>) {
    engine_with_policy(TransitionPolicy::Permissive)
}

pub(super) fn engine_with_policy(
    policy: TransitionPolicy,
) -> (TestEngine, Arc<MemoryRequestStore>, Arc<MemoryPaymentStore>) {
    let requests = Arc::new(MemoryRequestStore::default());
    let directory = Arc::new(MemoryDirectory::with_property(property()));
    let payments = Arc::new(MemoryPaymentStore::default());
    let engine =
        RequestLifecycleEngine::with_policy(requests.clone(), directory, payments.clone(), policy);
    (engine, requests, payments)
}

pub(super) fn submitted_request(engine: &TestEngine) -> RentalRequest {
    engine.submit(submission()).expect("submission accepted")
}
