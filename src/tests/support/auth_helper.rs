use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: "portfolio".to_string(),
        admin_token_expiry: 3600,
    })
}

pub fn admin_token() -> String {
    test_jwt_service().issue_admin_token("site-owner").unwrap()
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", admin_token()))
}

/// App data the `AdminUser` extractor looks up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}
