use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use jsonwebtoken::Algorithm;
use thiserror::Error;

#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    jwt_algorithm: Algorithm,
    access_expire_minutes: i64,
    refresh_expire_days: i64,
    service_host: String,
    service_port: u16,
}

impl Config {
    /// Build a config directly, bypassing the environment.
    pub fn new(
        jwt_secret: String,
        jwt_algorithm: Algorithm,
        access_expire_minutes: i64,
        refresh_expire_days: i64,
    ) -> Self {
        Self {
            jwt_secret,
            jwt_algorithm,
            access_expire_minutes,
            refresh_expire_days,
            service_host: "0.0.0.0".into(),
            service_port: 8000,
        }
    }

    pub fn jwt_secret(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
    pub fn jwt_algorithm(&self) -> Algorithm {
        self.jwt_algorithm
    }
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_expire_minutes * 60
    }
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_expire_days * 24 * 3600
    }
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let jwt_secret = req_var("JWT_SECRET_KEY")?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET_KEY must not be empty"));
        }

        let algorithm_name = opt_var("JWT_ALGORITHM").unwrap_or_else(|| "HS256".into());
        let jwt_algorithm = Algorithm::from_str(&algorithm_name)
            .map_err(|_| ConfigError::Invalid("JWT_ALGORITHM"))?;

        let access_expire_minutes = parse_i64_or("JWT_ACCESS_EXPIRE_MINUTES", 30)?;
        let refresh_expire_days = parse_i64_or("JWT_REFRESH_EXPIRE_DAYS", 7)?;
        if access_expire_minutes <= 0 || refresh_expire_days <= 0 {
            return Err(ConfigError::Invalid("token lifetimes must be positive"));
        }

        let service_host = opt_var("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let service_port = match opt_var("SERVICE_PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("SERVICE_PORT"))?,
            None => 8000,
        };

        Ok(Self {
            jwt_secret,
            jwt_algorithm,
            access_expire_minutes,
            refresh_expire_days,
            service_host,
            service_port,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_i64_or(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    match opt_var(key) {
        Some(v) => v.parse::<i64>().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}
