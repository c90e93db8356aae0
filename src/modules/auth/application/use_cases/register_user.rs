use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::password::strong_password_policy::PASSWORD_POLICY_MESSAGE;
use crate::shared::validation::{is_valid_email, FieldErrors};

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RegisterUserOutput {
    pub user_id: UserId,
    pub email: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid registration input: {0}")]
    InvalidInput(FieldErrors),

    #[error("Email is already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// Interface for RegisterUser use case
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput)
        -> Result<RegisterUserOutput, RegisterUserError>;
}

pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
        }
    }

    fn validate(&self, input: &RegisterUserInput) -> Result<String, RegisterUserError> {
        let email = input.email.trim();
        let mut errors = FieldErrors::new();

        if email.is_empty() {
            errors.add("email", "is required");
        } else if !is_valid_email(email) {
            errors.add("email", "must be a valid email address");
        }

        if let Err(violation) = self.password_policy.validate(&input.password) {
            warn!(reason = %violation, "Password rejected by policy");
            errors.add("password", PASSWORD_POLICY_MESSAGE);
        }

        errors
            .into_result()
            .map(|_| email.to_string())
            .map_err(RegisterUserError::InvalidInput)
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        let email = self.validate(&input)?;

        let existing = self
            .query
            .find_active_by_email(&email)
            .await
            .map_err(|e| RegisterUserError::QueryError(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // A concurrent registration can still win the race; the unique index
        // reports it as UserAlreadyExists.
        let user = self
            .repository
            .create_user(User::new(email, password_hash))
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
            })?;

        info!(user_id = %user.id, "User account created");

        Ok(RegisterUserOutput {
            user_id: user.id,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{
        HashError, UserQueryError, UserQueryResult,
    };
    use crate::auth::application::services::password::StrongPasswordPolicy;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    // ==================== Mocks ====================

    #[derive(Default)]
    struct MockUserQuery {
        existing_email: Option<String>,
        should_fail: bool,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_active_by_email(
            &self,
            email: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            if self.should_fail {
                return Err(UserQueryError::DatabaseError("db down".to_string()));
            }

            Ok(self
                .existing_email
                .as_deref()
                .filter(|existing| *existing == email)
                .map(|existing| UserQueryResult {
                    id: UserId::from(Uuid::new_v4()),
                    email: existing.to_string(),
                    password_hash: "hash".to_string(),
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }))
        }
    }

    #[derive(Default)]
    struct MockUserRepository {
        created: Mutex<Vec<User>>,
        error: Option<UserRepositoryError>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
            if let Some(err) = &self.error {
                return Err(err.clone());
            }
            self.created.lock().unwrap().push(user.clone());
            Ok(user)
        }
    }

    struct MockPasswordHasher {
        fail: bool,
    }

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            if self.fail {
                return Err(HashError::HashFailed);
            }
            Ok(format!("hashed::{password}"))
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(true)
        }
    }

    fn use_case(
        query: MockUserQuery,
        repository: MockUserRepository,
        hasher_fails: bool,
    ) -> RegisterUserUseCase<MockUserQuery, MockUserRepository> {
        RegisterUserUseCase::new(
            query,
            repository,
            Arc::new(MockPasswordHasher { fail: hasher_fails }),
            Arc::new(StrongPasswordPolicy::default()),
        )
    }

    fn input(email: &str, password: &str) -> RegisterUserInput {
        RegisterUserInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_register_success_stores_hash_only() {
        let uc = use_case(MockUserQuery::default(), MockUserRepository::default(), false);

        let output = uc
            .execute(input("  jane@example.com ", "Str0ng!Pass"))
            .await
            .unwrap();

        assert_eq!(output.email, "jane@example.com");

        let created = uc.repository.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].password_hash, "hashed::Str0ng!Pass");
        assert_eq!(created[0].id, output.user_id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let query = MockUserQuery {
            existing_email: Some("jane@example.com".to_string()),
            ..Default::default()
        };
        let uc = use_case(query, MockUserRepository::default(), false);

        let result = uc.execute(input("jane@example.com", "Str0ng!Pass")).await;

        assert!(matches!(result, Err(RegisterUserError::EmailAlreadyExists)));
        assert!(uc.repository.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_email_match_is_case_sensitive() {
        let query = MockUserQuery {
            existing_email: Some("jane@example.com".to_string()),
            ..Default::default()
        };
        let uc = use_case(query, MockUserRepository::default(), false);

        let result = uc.execute(input("Jane@example.com", "Str0ng!Pass")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_unique_violation_maps_to_conflict() {
        let repository = MockUserRepository {
            error: Some(UserRepositoryError::UserAlreadyExists),
            ..Default::default()
        };
        let uc = use_case(MockUserQuery::default(), repository, false);

        let result = uc.execute(input("jane@example.com", "Str0ng!Pass")).await;
        assert!(matches!(result, Err(RegisterUserError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn test_register_weak_password_is_validation_error() {
        let uc = use_case(MockUserQuery::default(), MockUserRepository::default(), false);

        let result = uc.execute(input("jane@example.com", "password")).await;

        match result {
            Err(RegisterUserError::InvalidInput(errors)) => {
                assert_eq!(errors.get("password"), Some(PASSWORD_POLICY_MESSAGE));
                assert!(errors.get("email").is_none());
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_invalid_email_is_validation_error() {
        let uc = use_case(MockUserQuery::default(), MockUserRepository::default(), false);

        let result = uc.execute(input("not-an-email", "Str0ng!Pass")).await;

        match result {
            Err(RegisterUserError::InvalidInput(errors)) => {
                assert_eq!(errors.get("email"), Some("must be a valid email address"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_query_failure() {
        let query = MockUserQuery {
            should_fail: true,
            ..Default::default()
        };
        let uc = use_case(query, MockUserRepository::default(), false);

        let result = uc.execute(input("jane@example.com", "Str0ng!Pass")).await;
        assert!(matches!(result, Err(RegisterUserError::QueryError(_))));
    }

    #[tokio::test]
    async fn test_register_hashing_failure() {
        let uc = use_case(MockUserQuery::default(), MockUserRepository::default(), true);

        let result = uc.execute(input("jane@example.com", "Str0ng!Pass")).await;
        assert!(matches!(result, Err(RegisterUserError::HashingFailed(_))));
    }

    #[tokio::test]
    async fn test_register_repository_failure() {
        let repository = MockUserRepository {
            error: Some(UserRepositoryError::DatabaseError("disk full".to_string())),
            ..Default::default()
        };
        let uc = use_case(MockUserQuery::default(), repository, false);

        let result = uc.execute(input("jane@example.com", "Str0ng!Pass")).await;
        assert!(matches!(
            result,
            Err(RegisterUserError::RepositoryError(msg)) if msg == "disk full"
        ));
    }
}
