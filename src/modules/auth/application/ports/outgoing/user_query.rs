// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;

/// Read model for credential checks.
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Exact, case-sensitive match among users that are not soft-deleted.
    async fn find_active_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError>;
}
