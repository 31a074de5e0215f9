use crate::models::user::{UserRole, UserStatus};
use chrono::{DateTime, TimeZone, Utc};
use std::path::Path;

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub placeholder: PlaceholderSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

/// Profile returned by `GetUser` until a real user store exists.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct PlaceholderSettings {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: UserStatus,
    pub role: UserRole,
    pub timestamp: DateTime<Utc>,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50051,
        }
    }
}

impl Default for PlaceholderSettings {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "johndoe@example.com".to_string(),
            status: UserStatus::Active,
            role: UserRole::User,
            // 2024-12-01T12:00:00Z
            timestamp: Utc
                .timestamp_opt(1_733_054_400, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}

impl ApplicationSettings {
    // Listen address: <host>:<port>
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn environment() -> config::Environment {
    // APP_APPLICATION__PORT=6000 -> application.port
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(environment())
        .build()?
        .try_deserialize()
}

/// Reads settings from an explicit file, still honouring `APP_*` overrides.
pub fn get_configuration_from(path: &Path) -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(environment())
        .build()?
        .try_deserialize()
}
