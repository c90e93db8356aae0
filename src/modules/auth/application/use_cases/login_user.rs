use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, TokenProvider, UserQuery,
};

#[derive(Debug, Clone)]
pub struct LoginUserInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginUserOutput {
    pub user_id: UserId,
    pub token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// Interface for Login use case
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, input: LoginUserInput) -> Result<LoginUserOutput, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, input: LoginUserInput) -> Result<LoginUserOutput, LoginError> {
        let email = input.email.trim();

        let user = match self
            .query
            .find_active_by_email(email)
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
        {
            Some(user) => user,
            None => {
                warn!("Login rejected: no active account for the given email");
                return Err(LoginError::InvalidCredentials);
            }
        };

        let is_valid = match self
            .password_hasher
            .verify_password(&input.password, &user.password_hash)
            .await
        {
            Ok(is_valid) => is_valid,
            Err(HashError::VerifyFailed) => {
                error!(user_id = %user.id, "Login rejected: stored password hash is unreadable");
                return Err(LoginError::InvalidCredentials);
            }
            Err(e) => return Err(LoginError::PasswordVerificationFailed(e.to_string())),
        };

        if !is_valid {
            warn!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .issue_token(user.id, &user.email)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginUserOutput {
            user_id: user.id,
            token,
        })
    }
}
