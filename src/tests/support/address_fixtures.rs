use chrono::Utc;
use uuid::Uuid;

use crate::address::application::domain::entities::{Address, AddressFields};
use crate::auth::application::domain::entities::UserId;

pub fn sample_fields() -> AddressFields {
    AddressFields {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "9876543210".to_string(),
        address_line1: "221B Baker Street".to_string(),
        address_line2: String::new(),
        city: "London".to_string(),
        state: String::new(),
        country: "UK".to_string(),
        pincode: "NW16XE".to_string(),
    }
}

pub fn sample_address(owner: UserId) -> Address {
    let fields = sample_fields();
    let now = Utc::now();

    Address {
        id: Uuid::new_v4(),
        user_id: owner,
        first_name: fields.first_name,
        last_name: fields.last_name,
        email: fields.email,
        phone: fields.phone,
        address_line1: fields.address_line1,
        address_line2: fields.address_line2,
        city: fields.city,
        state: fields.state,
        country: fields.country,
        pincode: fields.pincode,
        created_at: now,
        updated_at: now,
    }
}
