use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::marketplace::properties::PropertyId;

/// Identifier wrapper for rental requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub String);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload a tenant submits to open a request against a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRentalRequest {
    pub property_id: PropertyId,
    pub requester_email: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub people_count: u16,
}

/// Progress booleans stored independently; nothing at the storage layer
/// enforces mutual exclusion between them. [`RentalRequest::stage`]
/// collapses them into the tagged view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleFlags {
    pub accepted: bool,
    pub rejected: bool,
    pub canceled: bool,
    pub paid: bool,
    pub renter_reviewed: bool,
    pub landlord_reviewed: bool,
    pub property_reviewed: bool,
    pub completed: bool,
    pub approved: bool,
}

impl LifecycleFlags {
    /// Number of flags currently set.
    pub fn set_count(self) -> usize {
        [
            self.accepted,
            self.rejected,
            self.canceled,
            self.paid,
            self.renter_reviewed,
            self.landlord_reviewed,
            self.property_reviewed,
            self.completed,
            self.approved,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count()
    }
}

/// A tenant's request to rent a property for a date range. Requests are
/// never physically deleted; cancellation and rejection are soft states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRequest {
    pub id: RequestId,
    /// Explicit foreign key; resolved through the property directory.
    pub property_id: PropertyId,
    pub requester_email: String,
    /// Creation timestamp, immutable after submission.
    pub requested_at: DateTime<Utc>,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub people_count: u16,
    /// Total price for the stay, fixed at submission.
    pub amount: u32,
    pub flags: LifecycleFlags,
}

impl RentalRequest {
    /// Nights between arrival and departure; at least one for a stored
    /// request.
    pub fn nights(&self) -> i64 {
        (self.departure_date - self.arrival_date).num_days()
    }

    /// Collapse the stored flags into the tagged lifecycle view. Terminal
    /// and later stages dominate earlier ones; review flags are orthogonal
    /// and never define a stage.
    pub fn stage(&self) -> LifecycleStage {
        let flags = self.flags;
        if flags.canceled {
            LifecycleStage::Canceled
        } else if flags.rejected {
            LifecycleStage::Rejected
        } else if flags.completed {
            LifecycleStage::Completed
        } else if flags.paid {
            LifecycleStage::Paid
        } else if flags.approved {
            LifecycleStage::Approved
        } else if flags.accepted {
            LifecycleStage::Accepted
        } else {
            LifecycleStage::Pending
        }
    }

    pub fn status_view(&self) -> RequestStatusView {
        RequestStatusView {
            id: self.id.clone(),
            stage: self.stage().label(),
            amount: self.amount,
            flags: self.flags,
        }
    }
}

/// Tagged view over the progress flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    Pending,
    Accepted,
    Rejected,
    Canceled,
    Approved,
    Paid,
    Completed,
}

impl LifecycleStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Canceled => "canceled",
            Self::Approved => "approved",
            Self::Paid => "paid",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sanitized status summary for embedding services.
#[derive(Debug, Clone, Serialize)]
pub struct RequestStatusView {
    pub id: RequestId,
    pub stage: &'static str,
    pub amount: u32,
    pub flags: LifecycleFlags,
}
