use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "address-book-test".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        token_expiry: 3600,
    })
}

/// Registered as app data so `AuthenticatedUser` can verify tokens.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
    web::Data::new(provider)
}

pub fn bearer_header(user_id: UserId) -> (&'static str, String) {
    let token = create_test_jwt_service()
        .issue_token(user_id, "jane@example.com")
        .unwrap();
    ("Authorization", format!("Bearer {token}"))
}
