use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use super::{keys, ConfigSource};
use crate::core::ConfigError;

pub const PRODUCTION_BASE_URL: &str = "https://pix.api.efipay.com.br";
pub const SANDBOX_BASE_URL: &str = "https://pix-h.api.efipay.com.br";
pub const DEFAULT_PAYER_NOTE_PREFIX: &str = "Pedido Gamer Store";

/// Provider environment selected by `APP_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    /// Only the exact value `production` selects production
    pub fn from_mode(mode: Option<&str>) -> Self {
        match mode {
            Some("production") => Environment::Production,
            _ => Environment::Sandbox,
        }
    }

    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }

    fn credential_keys(&self) -> (&'static str, &'static str) {
        match self {
            Environment::Production => (keys::PROD_CLIENT_ID, keys::PROD_CLIENT_SECRET),
            Environment::Sandbox => (keys::HOMOLOG_CLIENT_ID, keys::HOMOLOG_CLIENT_SECRET),
        }
    }

    fn default_base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// OAuth client credentials for one environment
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Everything needed to authenticate against the Pix API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderClientConfig {
    pub credentials: ProviderCredentials,
    pub sandbox: bool,
    pub certificate_path: PathBuf,
    pub base_url: String,
}

/// Merchant-side values placed into every charge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeSettings {
    pub pix_key: String,
    pub payer_note_prefix: String,
}

/// Resolves provider configuration from an injected source.
///
/// Nothing is cached: each call reads the source again, so a resolver
/// always reflects the current configuration.
#[derive(Clone)]
pub struct ConfigResolver {
    source: Arc<dyn ConfigSource>,
}

impl ConfigResolver {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self { source }
    }

    pub fn environment(&self) -> Environment {
        Environment::from_mode(self.source.get(keys::APP_ENV).as_deref())
    }

    /// Resolve the client configuration, failing closed on any gap
    pub fn resolve(&self) -> Result<ProviderClientConfig, ConfigError> {
        let environment = self.environment();

        let certificate_path = self
            .source
            .get_non_empty(keys::CERTIFICATE_PATH)
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingCertificatePath)?;

        if !certificate_path.is_file() {
            tracing::error!(
                path = %certificate_path.display(),
                "Certificate file not found"
            );
            return Err(ConfigError::CertificateNotFound {
                path: certificate_path,
            });
        }

        let (id_key, secret_key) = environment.credential_keys();
        let client_id = self.source.get_non_empty(id_key);
        let client_secret = self.source.get_non_empty(secret_key);

        info!(
            mode = %environment,
            client_id_present = client_id.is_some(),
            "Initializing Efí Pay client"
        );

        let credentials = match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => ProviderCredentials {
                client_id,
                client_secret,
            },
            _ => return Err(ConfigError::MissingCredentials { environment }),
        };

        let base_url = self
            .source
            .get_non_empty(keys::BASE_URL)
            .unwrap_or_else(|| environment.default_base_url().to_string());

        Ok(ProviderClientConfig {
            credentials,
            sandbox: environment.is_sandbox(),
            certificate_path,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn charge_settings(&self) -> Result<ChargeSettings, ConfigError> {
        let pix_key = self
            .source
            .get_non_empty(keys::PIX_KEY)
            .ok_or(ConfigError::MissingPixKey)?;

        Ok(ChargeSettings {
            pix_key,
            payer_note_prefix: self
                .source
                .get_non_empty(keys::PAYER_NOTE_PREFIX)
                .unwrap_or_else(|| DEFAULT_PAYER_NOTE_PREFIX.to_string()),
        })
    }
}
