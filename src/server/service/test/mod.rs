use entity::prelude::AuditLog;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

use crate::server::config::AuthSettings;

mod auth;
mod event;
mod vehicle;

/// Fast bcrypt cost and a fixed secret for tests.
fn settings() -> AuthSettings {
    AuthSettings {
        jwt_secret: "test-secret".to_string(),
        token_ttl_hours: 2,
        bcrypt_cost: 4,
    }
}

async fn audit_rows(db: &DatabaseConnection) -> Result<Vec<entity::audit_log::Model>, DbErr> {
    AuditLog::find().all(db).await
}

async fn audit_count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    AuditLog::find().count(db).await
}
