use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::address::application::domain::entities::Address;

/// Wire representation of an address record.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddressView {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "9876543210")]
    pub phone: String,
    #[schema(example = "221B Baker Street")]
    pub address_line1: String,
    pub address_line2: String,
    #[schema(example = "London")]
    pub city: String,
    pub state: String,
    #[schema(example = "UK")]
    pub country: String,
    pub pincode: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Address> for AddressView {
    fn from(a: Address) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id.value(),
            first_name: a.first_name,
            last_name: a.last_name,
            email: a.email,
            phone: a.phone,
            address_line1: a.address_line1,
            address_line2: a.address_line2,
            city: a.city,
            state: a.state,
            country: a.country,
            pincode: a.pincode,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}
