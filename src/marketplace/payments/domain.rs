use serde::{Deserialize, Serialize};

use crate::marketplace::requests::RequestId;

/// Bank coordinates supplied by the tenant when settling a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    pub bank: String,
    pub account_number: String,
}

/// One-to-one payment companion of a rental request. Created when the
/// request becomes payable; bank details land later, exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub request_id: RequestId,
    /// Copied from the property's nightly rate when the record is opened.
    pub rental_price: u32,
    pub bank: Option<String>,
    pub account_number: Option<String>,
}

impl Payment {
    pub fn has_details(&self) -> bool {
        self.bank.is_some() && self.account_number.is_some()
    }
}
