use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::{
    io::{stdout, IsTerminal},
    sync::Arc,
    time::Duration,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{
    model::{audit::AuditAction, auth::Role},
    server::{
        config::Config,
        data::user::UserRepository,
        error::{config::ConfigError, AppError},
        model::user::NewUser,
        router,
        service::{
            audit::AuditTrail,
            auth::hash_password,
            ocr::{DisabledRecognizer, HttpPlateRecognizer, PlateRecognizer},
        },
        state::AppState,
    },
};

/// Camera frames are sent inline as base64, so the default 2 MB body limit is too small.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
const OCR_TIMEOUT: Duration = Duration::from_secs(15);

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` (default `info`). Output is human readable on a terminal and JSON
/// lines otherwise.
pub fn setup_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    if stdout().is_terminal() {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_target(true)
            .init();
    }

    tracing::info!("Logging initialized with level: {}", log_level);
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Makes sure someone can log in as admin.
///
/// When no active admin exists and bootstrap credentials are configured, creates that
/// admin account. Without credentials it only warns, since nobody will be able to
/// manage the registry.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let Some(bootstrap) = &config.bootstrap_admin else {
        tracing::warn!(
            "No active admin account exists; set BOOTSTRAP_ADMIN_USERNAME and \
             BOOTSTRAP_ADMIN_PASSWORD to create one on startup"
        );
        return Ok(());
    };

    let password_hash = hash_password(&config.auth, &bootstrap.password)?;

    let txn = db.begin().await?;
    let user_repo = UserRepository::new(&txn);

    if user_repo.username_taken(&bootstrap.username).await? {
        return Err(ConfigError::InvalidValue {
            var: "BOOTSTRAP_ADMIN_USERNAME".to_string(),
            reason: format!(
                "user {} exists but is not an active admin",
                bootstrap.username
            ),
        }
        .into());
    }

    let admin = user_repo
        .create(NewUser {
            username: bootstrap.username.clone(),
            name: bootstrap.username.clone(),
            password_hash,
            role: Role::Admin,
        })
        .await?;

    AuditTrail::new(&txn, None)
        .record(AuditAction::Create, None, Some(&admin))
        .await?;
    txn.commit().await?;

    tracing::info!("Created bootstrap admin account {}", admin.username);

    Ok(())
}

/// HTTP client for outbound calls. Redirects are disabled so a misconfigured OCR
/// endpoint cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(OCR_TIMEOUT)
        .build()?)
}

pub fn setup_plate_recognizer(
    config: &Config,
    http_client: reqwest::Client,
) -> Arc<dyn PlateRecognizer> {
    match &config.ocr_service_url {
        Some(url) => {
            tracing::info!("Plate recognition service at {}", url);
            Arc::new(HttpPlateRecognizer::new(http_client, url.clone()))
        }
        None => {
            tracing::warn!("OCR_SERVICE_URL not set; every scan will be recorded as failed");
            Arc::new(DisabledRecognizer)
        }
    }
}

/// Assembles the full application: routes, shared state and HTTP layers.
///
/// The login route is rate limited per client IP, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn build_app(config: &Config, state: AppState) -> Result<Router, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(config.login_rate_per_second)
        .burst_size(config.login_rate_burst)
        .finish()
        .ok_or_else(|| ConfigError::InvalidValue {
            var: "LOGIN_RATE_PER_SECOND".to_string(),
            reason: "rate and burst must both be greater than zero".to_string(),
        })?;

    let cors = match &config.cors_allowed_origin {
        Some(origin) => {
            let origin =
                HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                    var: "CORS_ALLOWED_ORIGIN".to_string(),
                    reason: e.to_string(),
                })?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = router::login_routes()
        .layer(GovernorLayer::new(Arc::new(governor_config)))
        .merge(router::api_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
