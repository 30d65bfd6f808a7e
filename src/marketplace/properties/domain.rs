use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for listed properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A listed property as the lifecycle engine sees it. Many requests may
/// reference one property; requests never own or mutate the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub owner_email: String,
    pub street_address: String,
    /// Price per night in the smallest currency unit.
    pub nightly_rate: u32,
    /// Maximum occupant count.
    pub capacity: u16,
    /// Cleared while the listing is tied up by an active rental.
    pub available: bool,
}
