pub mod address_query_postgres;
pub mod address_repository_postgres;
pub mod sea_orm_entity;

use chrono::Utc;

use crate::address::application::domain::entities::Address;
use crate::auth::application::domain::entities::UserId;

fn model_to_address(model: sea_orm_entity::addresses::Model) -> Address {
    Address {
        id: model.id,
        user_id: UserId::from(model.user_id),
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        phone: model.phone,
        address_line1: model.address_line1,
        address_line2: model.address_line2,
        city: model.city,
        state: model.state,
        country: model.country,
        pincode: model.pincode,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
