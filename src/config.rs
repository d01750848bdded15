use std::time::Duration;

use actix_web::cookie::Key;
use dotenvy::var;
use thiserror::Error;

const MIN_SESSION_SECRET_LEN: usize = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub pool_size: u32,
    pub pool_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub session_secret: Option<String>,
    pub cookie_secure: bool,
    pub static_url_prefix: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let pool_size = parse_or("DATABASE_POOL_SIZE", 10u32)?;
        let pool_timeout = Duration::from_secs(parse_or("DATABASE_POOL_TIMEOUT_SECS", 5u64)?);
        let host = var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_or("SERVER_PORT", 8080u16)?;

        let session_secret = var("SESSION_SECRET").ok().filter(|v| !v.is_empty());
        if let Some(secret) = &session_secret {
            if secret.len() < MIN_SESSION_SECRET_LEN {
                return Err(ConfigError::Invalid {
                    name: "SESSION_SECRET",
                    value: format!("<{} bytes, need at least {}>", secret.len(), MIN_SESSION_SECRET_LEN),
                });
            }
        }

        let cookie_secure = var("SESSION_COOKIE_SECURE")
            .ok()
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
        let static_url_prefix =
            var("STATIC_URL_PREFIX").unwrap_or_else(|_| "/static".to_string());

        Ok(Self {
            database_url,
            pool_size,
            pool_timeout,
            host,
            port,
            session_secret,
            cookie_secure,
            static_url_prefix,
        })
    }

    /// Signing/encryption key for session cookies. Without a configured
    /// secret every restart logs all users out.
    pub fn session_key(&self) -> Key {
        match &self.session_secret {
            Some(secret) => Key::derive_from(secret.as_bytes()),
            None => {
                warn!("SESSION_SECRET not set, generating a random session key");
                Key::generate()
            }
        }
    }
}

fn parse_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
