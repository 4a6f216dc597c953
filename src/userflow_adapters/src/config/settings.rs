use ::config::{Config, ConfigError, Environment};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

use crate::auth::BasicAuthCredentials;
use crate::config::constants::{ENV_SEPARATOR, env::APPLICATION_ADDRESS_ENV_VAR, prod};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load service settings: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Deserialize)]
pub struct ServiceSettings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub basic_auth: BasicAuthSettings,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct BasicAuthSettings {
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
}

impl ServiceSettings {
    /// Load settings from the process environment, reading `.env` first if present.
    ///
    /// `APPLICATION__ADDRESS`, `BASIC_AUTH__USERNAME` and `BASIC_AUTH__PASSWORD`
    /// map onto the nested fields.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default(config_key(APPLICATION_ADDRESS_ENV_VAR), prod::APP_ADDRESS)?
            .add_source(Environment::default().separator(ENV_SEPARATOR))
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        Ok(config.try_deserialize()?)
    }
}

/// The dotted configuration key an environment variable is mapped onto,
/// e.g. `BASIC_AUTH__USERNAME` to `basic_auth.username`.
pub fn config_key(env_var: &str) -> String {
    env_var.to_lowercase().replace(ENV_SEPARATOR, ".")
}

impl BasicAuthSettings {
    /// The configured pair, or `None` unless both halves are non-empty.
    pub fn credentials(&self) -> Option<BasicAuthCredentials> {
        let username = self.username.as_deref().filter(|u| !u.is_empty())?;
        let password = self
            .password
            .as_ref()
            .filter(|p| !p.expose_secret().is_empty())?;

        Some(BasicAuthCredentials::new(
            username,
            Secret::new(password.expose_secret().clone()),
        ))
    }
}
