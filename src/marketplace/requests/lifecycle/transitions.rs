use std::fmt;

use serde::{Deserialize, Serialize};

use crate::marketplace::requests::domain::{LifecycleFlags, LifecycleStage, RentalRequest};

/// How strictly the engine polices transitions.
///
/// Under `Permissive`, every flag operation succeeds on any existing
/// request, with no mutual exclusion between accepted, rejected, and
/// canceled. `Strict` enforces the tagged transition table instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    #[default]
    Permissive,
    Strict,
}

/// One lifecycle operation, named for the flag it sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    Accept,
    Reject,
    Cancel,
    Approve,
    Pay,
    Complete,
    ReviewRenter,
    ReviewLandlord,
    ReviewProperty,
}

impl LifecycleEvent {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
            Self::Cancel => "cancel",
            Self::Approve => "approve",
            Self::Pay => "pay",
            Self::Complete => "complete",
            Self::ReviewRenter => "review the renter of",
            Self::ReviewLandlord => "review the landlord of",
            Self::ReviewProperty => "review the property of",
        }
    }

    /// Set exactly the flag this event stands for.
    pub(crate) fn apply_to(self, flags: &mut LifecycleFlags) {
        match self {
            Self::Accept => flags.accepted = true,
            Self::Reject => flags.rejected = true,
            Self::Cancel => flags.canceled = true,
            Self::Approve => flags.approved = true,
            Self::Pay => flags.paid = true,
            Self::Complete => flags.completed = true,
            Self::ReviewRenter => flags.renter_reviewed = true,
            Self::ReviewLandlord => flags.landlord_reviewed = true,
            Self::ReviewProperty => flags.property_reviewed = true,
        }
    }

    pub(crate) fn already_applied(self, flags: LifecycleFlags) -> bool {
        match self {
            Self::Accept => flags.accepted,
            Self::Reject => flags.rejected,
            Self::Cancel => flags.canceled,
            Self::Approve => flags.approved,
            Self::Pay => flags.paid,
            Self::Complete => flags.completed,
            Self::ReviewRenter => flags.renter_reviewed,
            Self::ReviewLandlord => flags.landlord_reviewed,
            Self::ReviewProperty => flags.property_reviewed,
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised under the strict policy when an event contradicts the request's
/// current stage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot {event} a request in the {stage} stage")]
pub struct TransitionRefused {
    pub stage: LifecycleStage,
    pub event: LifecycleEvent,
}

/// Strict transition table. Re-applying an already-set flag is a no-op
/// success; contradictory or out-of-order events are refused.
pub(crate) fn check_transition(
    request: &RentalRequest,
    event: LifecycleEvent,
) -> Result<(), TransitionRefused> {
    let flags = request.flags;
    if event.already_applied(flags) {
        return Ok(());
    }

    let refused = match event {
        LifecycleEvent::Accept => flags.rejected || flags.canceled,
        LifecycleEvent::Reject => flags.accepted || flags.canceled,
        LifecycleEvent::Cancel => flags.rejected || flags.paid || flags.completed,
        LifecycleEvent::Approve => !flags.accepted || flags.rejected || flags.canceled,
        LifecycleEvent::Pay => {
            !flags.accepted || !flags.approved || flags.rejected || flags.canceled
        }
        LifecycleEvent::Complete => !flags.paid || flags.rejected || flags.canceled,
        LifecycleEvent::ReviewRenter
        | LifecycleEvent::ReviewLandlord
        | LifecycleEvent::ReviewProperty => !flags.completed,
    };

    if refused {
        return Err(TransitionRefused {
            stage: request.stage(),
            event,
        });
    }

    Ok(())
}
