use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::services::{BasicCredentials, UpstreamEndpoint};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub patient_service: UpstreamSettings,
    pub notes_service: UpstreamSettings,
    #[serde(default)]
    pub auth: Option<AuthSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    pub url: String,
    pub timeout_secs: Option<u64>,
}

/// Basic credentials sent to the patient and notes services
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub username: String,
    pub password: String,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8084 }

pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

impl UpstreamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS))
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Configuration file (config/default.toml)
    /// 2. Local overrides (config/local.toml)
    /// 3. Environment variables (prefixed with MEDILABO__)
    /// 4. Service URLs and gateway credentials from their well-known variables
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MEDILABO__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MEDILABO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_service_overrides(settings, |name| std::env::var(name).ok())?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MEDILABO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Credentials for upstream calls, if configured
    pub fn credentials(&self) -> Option<BasicCredentials> {
        self.auth.as_ref().map(|auth| BasicCredentials {
            username: auth.username.clone(),
            password: auth.password.clone(),
        })
    }

    pub fn patient_endpoint(&self) -> UpstreamEndpoint {
        UpstreamEndpoint::new(self.patient_service.url.clone(), self.patient_service.timeout())
            .with_credentials(self.credentials())
    }

    pub fn notes_endpoint(&self) -> UpstreamEndpoint {
        UpstreamEndpoint::new(self.notes_service.url.clone(), self.notes_service.timeout())
            .with_credentials(self.credentials())
    }
}

/// Apply the deployment variables shared with the other platform services
///
/// `PATIENT_SERVICE_URL`, `NOTE_SERVICE_URL`, `GATEWAY_AUTH_USERNAME` and
/// `GATEWAY_AUTH_PASSWORD` win over anything in the config files.
fn apply_service_overrides<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let overrides = [
        ("PATIENT_SERVICE_URL", "patient_service.url"),
        ("NOTE_SERVICE_URL", "notes_service.url"),
        ("GATEWAY_AUTH_USERNAME", "auth.username"),
        ("GATEWAY_AUTH_PASSWORD", "auth.password"),
    ];

    let mut builder = Config::builder().add_source(settings);

    for (var, key) in overrides {
        if let Some(value) = lookup(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
