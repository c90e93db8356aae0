use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::model_to_address;
use super::sea_orm_entity::addresses::{Column, Entity};
use crate::address::application::domain::entities::Address;
use crate::address::application::ports::outgoing::address_query::{
    AddressListFilter, AddressQuery, AddressQueryError, PageRequest, PageResult,
};
use crate::auth::application::domain::entities::UserId;

#[derive(Clone)]
pub struct AddressQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AddressQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Owner-scoped, live rows only, newest first.
    fn owned_by(owner: UserId) -> Select<Entity> {
        let owner_uuid: Uuid = owner.into();

        Entity::find()
            .filter(Column::UserId.eq(owner_uuid))
            .filter(Column::IsDeleted.eq(false))
            .order_by_desc(Column::CreatedAt)
    }
}

/// `search` is a substring match over the name, email and phone columns.
/// `city` and `country` are passed to ILIKE as given.
fn apply_filter(mut query: Select<Entity>, filter: &AddressListFilter) -> Select<Entity> {
    if let Some(ref search) = filter.search {
        let pattern = format!("%{}%", search);
        query = query.filter(
            Condition::any()
                .add(Expr::col(Column::FirstName).ilike(&pattern))
                .add(Expr::col(Column::LastName).ilike(&pattern))
                .add(Expr::col(Column::Email).ilike(&pattern))
                .add(Expr::col(Column::Phone).ilike(&pattern)),
        );
    }

    if let Some(ref city) = filter.city {
        query = query.filter(Expr::col(Column::City).ilike(city));
    }

    if let Some(ref country) = filter.country {
        query = query.filter(Expr::col(Column::Country).ilike(country));
    }

    query
}

fn apply_page(query: Select<Entity>, page: PageRequest) -> Select<Entity> {
    query.offset(page.offset()).limit(page.limit)
}

#[async_trait]
impl AddressQuery for AddressQueryPostgres {
    async fn list(
        &self,
        owner: UserId,
        filter: AddressListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Address>, AddressQueryError> {
        let query = apply_filter(Self::owned_by(owner), &filter);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = apply_page(query, page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: models.into_iter().map(model_to_address).collect(),
            page: page.page,
            limit: page.limit,
            total,
        })
    }

    async fn find_all(&self, owner: UserId) -> Result<Vec<Address>, AddressQueryError> {
        let models = Self::owned_by(owner)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_address).collect())
    }
}

fn map_db_err(e: DbErr) -> AddressQueryError {
    AddressQueryError::DatabaseError(e.to_string())
}
