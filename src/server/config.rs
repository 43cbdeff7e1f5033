use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 2;
const MIN_TOKEN_TTL_HOURS: i64 = 2;
const MAX_TOKEN_TTL_HOURS: i64 = 8;
const DEFAULT_LOGIN_RATE_PER_SECOND: u64 = 2;
const DEFAULT_LOGIN_RATE_BURST: u32 = 10;

/// Settings used to issue and verify access tokens and password hashes.
#[derive(Clone, Debug)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
}

/// First admin account created when the database has none.
#[derive(Clone, Debug)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub auth: AuthSettings,

    pub ocr_service_url: Option<String>,
    pub cors_allowed_origin: Option<String>,

    pub login_rate_per_second: u64,
    pub login_rate_burst: u32,

    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let token_ttl_hours = match optional("JWT_EXPIRATION_HOURS") {
            Some(value) => parse_var::<i64>("JWT_EXPIRATION_HOURS", &value)?,
            None => DEFAULT_TOKEN_TTL_HOURS,
        };
        if !(MIN_TOKEN_TTL_HOURS..=MAX_TOKEN_TTL_HOURS).contains(&token_ttl_hours) {
            return Err(ConfigError::InvalidValue {
                var: "JWT_EXPIRATION_HOURS".to_string(),
                reason: format!(
                    "must be between {} and {} hours",
                    MIN_TOKEN_TTL_HOURS, MAX_TOKEN_TTL_HOURS
                ),
            }
            .into());
        }

        let bcrypt_cost = match optional("BCRYPT_COST") {
            Some(value) => parse_var::<u32>("BCRYPT_COST", &value)?,
            None => bcrypt::DEFAULT_COST,
        };

        let login_rate_per_second = match optional("LOGIN_RATE_PER_SECOND") {
            Some(value) => parse_var::<u64>("LOGIN_RATE_PER_SECOND", &value)?,
            None => DEFAULT_LOGIN_RATE_PER_SECOND,
        };
        let login_rate_burst = match optional("LOGIN_RATE_BURST") {
            Some(value) => parse_var::<u32>("LOGIN_RATE_BURST", &value)?,
            None => DEFAULT_LOGIN_RATE_BURST,
        };

        let bootstrap_admin = match (
            optional("BOOTSTRAP_ADMIN_USERNAME"),
            optional("BOOTSTRAP_ADMIN_PASSWORD"),
        ) {
            (Some(username), Some(password)) => Some(BootstrapAdmin { username, password }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            auth: AuthSettings {
                jwt_secret: required("JWT_SECRET")?,
                token_ttl_hours,
                bcrypt_cost,
            },
            ocr_service_url: optional("OCR_SERVICE_URL"),
            cors_allowed_origin: optional("CORS_ALLOWED_ORIGIN"),
            login_rate_per_second,
            login_rate_burst,
            bootstrap_admin,
        })
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.auth.token_ttl_hours, 2);
        assert_eq!(config.auth.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert!(config.ocr_service_url.is_none());
        assert!(config.bootstrap_admin.is_none());
    }

    #[test]
    fn requires_jwt_secret() {
        let result = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")]));

        match result {
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(var))) => {
                assert_eq!(var, "JWT_SECRET")
            }
            other => panic!("Expected MissingEnvVar, got {:?}", other.err()),
        }
    }

    #[test]
    fn rejects_token_lifetime_outside_window() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
            ("JWT_EXPIRATION_HOURS", "12"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn reads_bootstrap_admin_only_when_complete() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
            ("BOOTSTRAP_ADMIN_USERNAME", "root"),
        ]))
        .unwrap();
        assert!(config.bootstrap_admin.is_none());

        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
            ("BOOTSTRAP_ADMIN_USERNAME", "root"),
            ("BOOTSTRAP_ADMIN_PASSWORD", "changeme"),
        ]))
        .unwrap();
        assert_eq!(config.bootstrap_admin.unwrap().username, "root");
    }
}
