// src/config.rs
use sqlx::postgres::PgConnectOptions;
use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database: DatabaseSettings,
    server_address: String,
    context_timeout: Duration,
    debug: bool,
}

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    url: Option<String>,
    host: String,
    port: u16,
    user: String,
    password: String,
    name: String,
    timezone: String,
    max_connections: u32,
    acquire_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_server_address() -> String {
    "127.0.0.1:9090".into()
}

const DEFAULT_CONTEXT_TIMEOUT_SECS: u64 = 2;
const DEFAULT_MAX_CONNECTIONS: u32 = 16;

impl AppConfig {
    /// Build configuration from environment variables, letting a `.env` file
    /// fill in anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let get = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let context_timeout = Duration::from_secs(
            parse_or(get("CONTEXT_TIMEOUT"), "CONTEXT_TIMEOUT", DEFAULT_CONTEXT_TIMEOUT_SECS)?,
        );
        if context_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "CONTEXT_TIMEOUT must be at least one second".into(),
            ));
        }

        let database = DatabaseSettings {
            url: get("DATABASE_URL"),
            host: get("DATABASE_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or(get("DATABASE_PORT"), "DATABASE_PORT", 5432)?,
            user: get("DATABASE_USER").unwrap_or_else(|| "postgres".into()),
            password: get("DATABASE_PASS").unwrap_or_else(|| "postgres".into()),
            name: get("DATABASE_NAME").unwrap_or_else(|| "article".into()),
            timezone: get("DATABASE_TIMEZONE").unwrap_or_else(|| "UTC".into()),
            max_connections: parse_or(
                get("DATABASE_MAX_CONNECTIONS"),
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            acquire_timeout: context_timeout,
        };

        let debug = get("DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            database,
            server_address: get("SERVER_ADDRESS").unwrap_or_else(default_server_address),
            context_timeout,
            debug,
        })
    }

    pub const fn database(&self) -> &DatabaseSettings {
        &self.database
    }

    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    /// Per-call deadline applied by the usecase layer.
    pub const fn context_timeout(&self) -> Duration {
        self.context_timeout
    }

    pub const fn debug(&self) -> bool {
        self.debug
    }
}

impl DatabaseSettings {
    /// Connection options assembled from the individual settings, unless a
    /// full `DATABASE_URL` was given.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let options = match &self.url {
            Some(url) => PgConnectOptions::from_str(url)?,
            None => PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.name),
        };
        Ok(options.options([("timezone", self.timezone.as_str())]))
    }

    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub const fn acquire_timeout(&self) -> Duration {
        self.acquire_timeout
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    value.map_or(Ok(default), |raw| {
        raw.parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value: {raw}")))
    })
}
