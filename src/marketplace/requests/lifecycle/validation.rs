use chrono::{Duration, NaiveDate};

/// Stay-term validation failures. The embedding service maps these to
/// 400-class responses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StayValidationError {
    #[error("start date {requested} is earlier than {today}")]
    InvalidStartDate {
        requested: NaiveDate,
        today: NaiveDate,
    },
    #[error("end date {requested} must be at least one day after {arrival}")]
    InvalidEndDate {
        requested: NaiveDate,
        arrival: NaiveDate,
    },
    #[error("party of {requested} exceeds the property capacity of {capacity}")]
    InvalidPeopleNumber { requested: u16, capacity: u16 },
}

/// Apply the stay rules in order: arrival not in the past, at least one
/// night, party within capacity. First failure wins.
pub(crate) fn validate_stay(
    today: NaiveDate,
    arrival: NaiveDate,
    departure: NaiveDate,
    capacity: u16,
    people_count: u16,
) -> Result<(), StayValidationError> {
    if arrival < today {
        return Err(StayValidationError::InvalidStartDate {
            requested: arrival,
            today,
        });
    }

    if departure < arrival + Duration::days(1) {
        return Err(StayValidationError::InvalidEndDate {
            requested: departure,
            arrival,
        });
    }

    if people_count > capacity {
        return Err(StayValidationError::InvalidPeopleNumber {
            requested: people_count,
            capacity,
        });
    }

    Ok(())
}
