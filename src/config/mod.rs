use std::collections::HashMap;
use std::env;

pub mod efi;

pub use efi::{
    ChargeSettings, ConfigResolver, Environment, ProviderClientConfig, ProviderCredentials,
};

/// Configuration keys read by this crate
pub mod keys {
    pub const APP_ENV: &str = "APP_ENV";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    pub const CERTIFICATE_PATH: &str = "EFI_CERTIFICATE_PATH";
    pub const PROD_CLIENT_ID: &str = "EFI_PROD_CLIENT_ID";
    pub const PROD_CLIENT_SECRET: &str = "EFI_PROD_CLIENT_SECRET";
    pub const HOMOLOG_CLIENT_ID: &str = "EFI_HOMOLOG_CLIENT_ID";
    pub const HOMOLOG_CLIENT_SECRET: &str = "EFI_HOMOLOG_CLIENT_SECRET";
    pub const PIX_KEY: &str = "EFI_PIX_KEY";
    pub const PAYER_NOTE_PREFIX: &str = "EFI_PAYER_NOTE_PREFIX";
    pub const BASE_URL: &str = "EFI_BASE_URL";
}

/// Read-only view over key/value configuration.
///
/// Values are looked up on every call, so a source reflects its backing
/// store at the time of the lookup.
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Like [`ConfigSource::get`], treating blank values as absent
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }
}

/// Process environment, seeded from a `.env` file when present
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl EnvSource {
    pub fn new() -> Self {
        // Load .env file if present; existing variables win
        dotenvy::dotenv().ok();
        Self
    }
}

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// In-memory configuration, for tests and embedding callers
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

impl FromIterator<(String, String)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Process-level settings used by the binary
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub json_logs: bool,
}

impl AppConfig {
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        Self {
            env: source
                .get_non_empty(keys::APP_ENV)
                .unwrap_or_else(|| "development".to_string()),
            log_level: source
                .get_non_empty(keys::LOG_LEVEL)
                .unwrap_or_else(|| "info".to_string()),
            json_logs: source
                .get_non_empty(keys::LOG_FORMAT)
                .is_some_and(|format| format.eq_ignore_ascii_case("json")),
        }
    }
}
