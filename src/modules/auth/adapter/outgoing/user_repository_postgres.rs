use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, SqlErr};
use std::sync::Arc;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Model as UserModel};
use crate::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: UserId::from(model.id),
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
            is_deleted: model.is_deleted,
        }
    }

    fn is_unique_violation(err: &DbErr) -> bool {
        if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            return true;
        }
        let err_str = err.to_string().to_lowercase();
        err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(user.id.value()),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
            is_deleted: Set(user.is_deleted),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if Self::is_unique_violation(&e) {
                tracing::warn!("Rejected duplicate user insert");
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Self::map_to_user(inserted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr};

    fn model_for(user: &User) -> UserModel {
        UserModel {
            id: user.id.value(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_at: user.created_at.into(),
            updated_at: user.updated_at.into(),
            is_deleted: false,
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let user = User::new("jane@example.com".to_string(), "hashed".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model_for(&user)]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let created = repo.create_user(user.clone()).await.unwrap();

        assert_eq!(created.id, user.id);
        assert_eq!(created.email, "jane@example.com");
        assert_eq!(created.password_hash, "hashed");
        assert!(!created.is_deleted);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"idx_users_email_active\""
                    .to_string(),
            ))])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create_user(User::new("jane@example.com".to_string(), "h".to_string()))
            .await;

        assert!(matches!(result, Err(UserRepositoryError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_create_user_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create_user(User::new("jane@example.com".to_string(), "h".to_string()))
            .await;

        match result {
            Err(UserRepositoryError::DatabaseError(msg)) => {
                assert!(msg.contains("connection refused"))
            }
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }

    #[test]
    fn test_map_to_user_keeps_timestamps() {
        let now = Utc::now();
        let user = User::new("a@b.co".to_string(), "h".to_string());
        let mut model = model_for(&user);
        model.created_at = now.into();

        let mapped = UserRepositoryPostgres::map_to_user(model);
        assert_eq!(mapped.created_at, now);
    }
}
