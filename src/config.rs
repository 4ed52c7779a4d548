use std::path::Path;

use secrecy::Secret;
use serde_aux::prelude::deserialize_bool_from_anything;

pub const DEFAULT_APPLICATION_NAME: &str = "customer_notify";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_CUSTOMER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";
pub const DEFAULT_CUSTOMER_EMAIL: &str = "customer@example.com";
pub const DEFAULT_CUSTOMER_NAME: &str = "John Doe";
pub const DEFAULT_API_KEY: &str = "sk_live_abc123xyz789";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }

    /// Reads `APP_ENVIRONMENT`, falling back to `local` when it is unset.
    pub fn detect() -> Result<Self, String> {
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other,
            )),
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub name: String,
    pub log_level: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct CustomerSettings {
    pub customer_id: String,
    pub email: String,
    pub customer_name: String,
    pub api_key: Secret<String>,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct OutputSettings {
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub reveal_api_key: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            reveal_api_key: true,
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub application: ApplicationSettings,
    pub customer: CustomerSettings,
    pub output: OutputSettings,
}

/// Loads configuration from `./configuration` for the environment named by
/// `APP_ENVIRONMENT`.
pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let environment = Environment::detect()
        .map_err(|e| config::ConfigError::Message(format!("Invalid APP_ENVIRONMENT: {}", e)))?;

    get_configuration_from(&base_path.join("configuration"), environment)
}

/// Layers built-in defaults, `base`, the environment file and `APP_`
/// environment variables, in that order. Every file is optional.
pub fn get_configuration_from(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<Configuration, config::ConfigError> {
    let mut settings = config::Config::default();

    settings
        .set_default("application.name", DEFAULT_APPLICATION_NAME)?
        .set_default("application.log_level", DEFAULT_LOG_LEVEL)?
        .set_default("customer.customer_id", DEFAULT_CUSTOMER_ID)?
        .set_default("customer.email", DEFAULT_CUSTOMER_EMAIL)?
        .set_default("customer.customer_name", DEFAULT_CUSTOMER_NAME)?
        .set_default("customer.api_key", DEFAULT_API_KEY)?
        .set_default("output.reveal_api_key", true)?;

    // Picks up base.yaml, base.json, base.toml... whichever exists.
    settings.merge(config::File::from(configuration_directory.join("base")).required(false))?;
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(false),
    )?;

    // e.g. `APP_CUSTOMER__EMAIL=jane@example.com` sets `customer.email`.
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    settings.try_into()
}
