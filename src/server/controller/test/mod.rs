use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{
    config::AuthSettings, model::user::User, router, service::auth::encode_token,
    service::ocr::StaticRecognizer, state::AppState,
};

mod person;
mod report;

fn settings() -> AuthSettings {
    AuthSettings {
        jwt_secret: "controller-test-secret".to_string(),
        token_ttl_hours: 2,
        bcrypt_cost: 4,
    }
}

/// The full route table over `db`, with an OCR backend that reads `plates`.
fn app(db: &DatabaseConnection, plates: &[&str]) -> Router {
    router::router().with_state(AppState::new(
        db.clone(),
        settings(),
        Arc::new(StaticRecognizer::new(plates)),
    ))
}

fn token_for(user: entity::user::Model) -> String {
    let user = User::from_entity(user).unwrap();
    let (token, _) = encode_token(&settings(), &user).unwrap();
    token
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
