use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    config::AuthSettings,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    service::auth::encode_token,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn settings() -> AuthSettings {
    AuthSettings {
        jwt_secret: "guard-test-secret".to_string(),
        token_ttl_hours: 2,
        bcrypt_cost: 4,
    }
}

/// Headers carrying a freshly signed bearer token for `user`.
fn bearer_for(settings: &AuthSettings, user: entity::user::Model) -> HeaderMap {
    let user = User::from_entity(user).unwrap();
    let (token, _) = encode_token(settings, &user).unwrap();

    bearer(&token)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
