use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::model_to_address;
use super::sea_orm_entity::addresses::{ActiveModel, Column, Entity};
use crate::address::application::domain::entities::{Address, AddressFields};
use crate::address::application::ports::outgoing::address_repository::{
    AddressPatch, AddressRepository, AddressRepositoryError, PatchField,
};
use crate::auth::application::domain::entities::UserId;

#[derive(Clone)]
pub struct AddressRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AddressRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepository for AddressRepositoryPostgres {
    async fn create_address(
        &self,
        owner: UserId,
        fields: AddressFields,
    ) -> Result<Address, AddressRepositoryError> {
        let owner_uuid: Uuid = owner.into();
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner_uuid),
            first_name: Set(fields.first_name),
            last_name: Set(fields.last_name),
            email: Set(fields.email),
            phone: Set(fields.phone),
            address_line1: Set(fields.address_line1),
            address_line2: Set(fields.address_line2),
            city: Set(fields.city),
            state: Set(fields.state),
            country: Set(fields.country),
            pincode: Set(fields.pincode),
            created_at: Set(now),
            updated_at: Set(now),
            is_deleted: Set(false),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_address(result))
    }

    async fn patch_address(
        &self,
        owner: UserId,
        address_id: Uuid,
        patch: AddressPatch,
    ) -> Result<Address, AddressRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        if patch.is_noop() {
            let result = Entity::find_by_id(address_id)
                .filter(Column::UserId.eq(owner_uuid))
                .filter(Column::IsDeleted.eq(false))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(AddressRepositoryError::NotFound)?;

            return Ok(model_to_address(result));
        }

        let mut model = <ActiveModel as Default>::default();
        apply(&mut model.first_name, patch.first_name);
        apply(&mut model.last_name, patch.last_name);
        apply(&mut model.email, patch.email);
        apply(&mut model.phone, patch.phone);
        apply(&mut model.address_line1, patch.address_line1);
        apply(&mut model.address_line2, patch.address_line2);
        apply(&mut model.city, patch.city);
        apply(&mut model.state, patch.state);
        apply(&mut model.country, patch.country);
        apply(&mut model.pincode, patch.pincode);
        model.updated_at = Set(Utc::now().fixed_offset());

        // Ownership and liveness are checked by the UPDATE itself.
        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(address_id))
            .filter(Column::UserId.eq(owner_uuid))
            .filter(Column::IsDeleted.eq(false))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(AddressRepositoryError::NotFound)?;

        Ok(model_to_address(result))
    }

    async fn soft_delete_address(
        &self,
        owner: UserId,
        address_id: Uuid,
    ) -> Result<(), AddressRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let res = Entity::update_many()
            .col_expr(Column::IsDeleted, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(address_id))
            .filter(Column::UserId.eq(owner_uuid))
            .filter(Column::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(AddressRepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Only an explicit value replaces the column. Null keeps it.
fn apply(column: &mut sea_orm::ActiveValue<String>, field: PatchField<String>) {
    if let Some(value) = field.into_value() {
        *column = Set(value);
    }
}

fn map_db_err(e: DbErr) -> AddressRepositoryError {
    AddressRepositoryError::DatabaseError(e.to_string())
}
