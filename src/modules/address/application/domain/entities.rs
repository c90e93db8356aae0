use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// A contact record. Optional text fields are empty strings when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub id: Uuid,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for a new record. The owner is supplied separately by the
/// caller's identity, never by the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

impl AddressFields {
    /// Surrounding whitespace is dropped from every value.
    pub fn trimmed(self) -> Self {
        let trim = |v: String| v.trim().to_string();
        Self {
            first_name: trim(self.first_name),
            last_name: trim(self.last_name),
            email: trim(self.email),
            phone: trim(self.phone),
            address_line1: trim(self.address_line1),
            address_line2: trim(self.address_line2),
            city: trim(self.city),
            state: trim(self.state),
            country: trim(self.country),
            pincode: trim(self.pincode),
        }
    }
}
