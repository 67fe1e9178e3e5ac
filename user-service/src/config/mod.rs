use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const USERS_TABLE_NAME_VAR: &str = "USERS_TABLE_NAME";

#[derive(Debug, Clone, Deserialize)]
pub struct UserConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub host: String,
    pub mongodb: MongoConfig,
    /// Table (collection) every lookup reads from.
    pub users_table_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: Secret<String>,
    pub database: String,
}

impl UserConfig {
    /// Load the common settings, then the service's own environment.
    ///
    /// Fails when `USERS_TABLE_NAME` is unset or empty: the service must not
    /// start without knowing which table to read.
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = core_config::Config::load()?;
        Self::from_env(common)
    }

    pub fn from_env(common: core_config::Config) -> Result<Self, AppError> {
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(UserConfig {
            common,
            host: get_env("USER_SERVICE_HOST", Some("0.0.0.0"), is_prod)?,
            mongodb: MongoConfig {
                uri: Secret::new(get_env(
                    "MONGODB_URI",
                    Some("mongodb://localhost:27017"),
                    is_prod,
                )?),
                database: get_env("MONGODB_DATABASE", Some("user_db"), false)?,
            },
            users_table_name: get_env(USERS_TABLE_NAME_VAR, None, is_prod)?,
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
