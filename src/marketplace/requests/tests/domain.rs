use chrono::{NaiveDate, Utc};
use serde_json::json;

use super::common::property;
use crate::marketplace::requests::domain::{
    LifecycleFlags, LifecycleStage, RentalRequest, RequestId,
};

fn request_with(flags: LifecycleFlags) -> RentalRequest {
    RentalRequest {
        id: RequestId("req-000001".to_string()),
        property_id: property().id,
        requester_email: "tenant@lettings.test".to_string(),
        requested_at: Utc::now(),
        arrival_date: NaiveDate::from_ymd_opt(2026, 7, 1).expect("valid date"),
        departure_date: NaiveDate::from_ymd_opt(2026, 7, 4).expect("valid date"),
        people_count: 2,
        amount: 270,
        flags,
    }
}

#[test]
fn stage_derivation_prefers_terminal_and_later_flags() {
    assert_eq!(
        request_with(LifecycleFlags::default()).stage(),
        LifecycleStage::Pending
    );

    let accepted = request_with(LifecycleFlags {
        accepted: true,
        ..LifecycleFlags::default()
    });
    assert_eq!(accepted.stage(), LifecycleStage::Accepted);

    // Contradictory flags can coexist in stored data; the canceled and
    // rejected states dominate the derived view.
    let rejected_after_accept = request_with(LifecycleFlags {
        accepted: true,
        rejected: true,
        ..LifecycleFlags::default()
    });
    assert_eq!(rejected_after_accept.stage(), LifecycleStage::Rejected);

    let canceled_late = request_with(LifecycleFlags {
        accepted: true,
        approved: true,
        paid: true,
        canceled: true,
        ..LifecycleFlags::default()
    });
    assert_eq!(canceled_late.stage(), LifecycleStage::Canceled);

    let paid = request_with(LifecycleFlags {
        accepted: true,
        approved: true,
        paid: true,
        ..LifecycleFlags::default()
    });
    assert_eq!(paid.stage(), LifecycleStage::Paid);

    let completed = request_with(LifecycleFlags {
        accepted: true,
        approved: true,
        paid: true,
        completed: true,
        ..LifecycleFlags::default()
    });
    assert_eq!(completed.stage(), LifecycleStage::Completed);
}

#[test]
fn review_flags_never_define_a_stage() {
    let reviewed = request_with(LifecycleFlags {
        renter_reviewed: true,
        landlord_reviewed: true,
        property_reviewed: true,
        ..LifecycleFlags::default()
    });
    assert_eq!(reviewed.stage(), LifecycleStage::Pending);
}

#[test]
fn nights_span_the_stay() {
    assert_eq!(request_with(LifecycleFlags::default()).nights(), 3);
}

#[test]
fn status_view_serializes_the_stage_label() {
    let request = request_with(LifecycleFlags {
        accepted: true,
        approved: true,
        ..LifecycleFlags::default()
    });
    let view = serde_json::to_value(request.status_view()).expect("view serializes");
    assert_eq!(view["stage"], json!("approved"));
    assert_eq!(view["amount"], json!(270));
    assert_eq!(view["flags"]["accepted"], json!(true));
    assert_eq!(view["flags"]["paid"], json!(false));
}
