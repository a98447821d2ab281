use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Identity, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::OnceCell;
use tracing::debug;

use super::super::models::{ChargeRequest, CreatedCharge, ProviderError, QrCode};
use super::pix_trait::{PixApi, PixConnector};
use crate::config::{ProviderClientConfig, ProviderCredentials};
use crate::core::ConfigError;

/// Connects [`EfiPixClient`]s, one per charge attempt
#[derive(Debug, Clone, Copy, Default)]
pub struct EfiConnector;

impl PixConnector for EfiConnector {
    fn connect(&self, config: &ProviderClientConfig) -> Result<Arc<dyn PixApi>, ConfigError> {
        Ok(Arc::new(EfiPixClient::new(config)?))
    }
}

/// Efí Pay Pix API client
///
/// Authenticates with mutual TLS plus an OAuth2 client-credentials token.
/// API Documentation: https://dev.efipay.com.br/docs/api-pix/credenciais
pub struct EfiPixClient {
    client: Client,
    credentials: ProviderCredentials,
    base_url: String,
    token: OnceCell<String>,
}

impl EfiPixClient {
    /// Create a client presenting the certificate from `config`.
    ///
    /// The certificate file must be PEM and hold both the client
    /// certificate and its private key.
    pub fn new(config: &ProviderClientConfig) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidCertificate {
            path: config.certificate_path.clone(),
            reason,
        };

        let pem = std::fs::read(&config.certificate_path).map_err(|e| invalid(e.to_string()))?;
        let identity = Identity::from_pem(&pem).map_err(|e| invalid(e.to_string()))?;

        let client = Client::builder()
            .use_rustls_tls()
            .identity(identity)
            .build()
            .map_err(|e| invalid(format!("failed to build TLS client: {}", e)))?;

        Ok(Self::with_client(
            client,
            config.credentials.clone(),
            config.base_url.clone(),
        ))
    }

    /// Create a client over an already configured HTTP client
    pub fn with_client(client: Client, credentials: ProviderCredentials, base_url: String) -> Self {
        Self {
            client,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: OnceCell::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn access_token(&self) -> Result<&str, ProviderError> {
        self.token
            .get_or_try_init(|| self.request_token())
            .await
            .map(String::as_str)
    }

    async fn request_token(&self) -> Result<String, ProviderError> {
        debug!(base_url = %self.base_url, "Requesting Efí access token");

        let response = self
            .client
            .post(self.url("/oauth/token"))
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .json(&json!({ "grant_type": "client_credentials" }))
            .send()
            .await?;

        let token: TokenResponse = read_json(response).await?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl PixApi for EfiPixClient {
    async fn create_immediate_charge(
        &self,
        request: &ChargeRequest,
    ) -> Result<CreatedCharge, ProviderError> {
        let token = self.access_token().await?;

        debug!(
            amount = %request.amount(),
            expiration = %request.expiration(),
            "Sending immediate charge to Efí"
        );

        let response = self
            .client
            .post(self.url("/v2/cob"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        let cob: CobResponse = read_json(response).await?;

        Ok(CreatedCharge {
            txid: cob.txid,
            location_id: cob.loc.map(|loc| loc.id),
        })
    }

    async fn generate_qr_code(&self, charge: &CreatedCharge) -> Result<QrCode, ProviderError> {
        let location_id = charge.location_id.ok_or_else(|| {
            ProviderError::unknown(format!("charge {} has no payload location", charge.txid))
        })?;

        let token = self.access_token().await?;

        debug!(txid = %charge.txid, location_id, "Fetching QR code from Efí");

        let response = self
            .client
            .get(self.url(&format!("/v2/loc/{}/qrcode", location_id)))
            .bearer_auth(token)
            .send()
            .await?;

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ProviderError::from_response(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| {
        ProviderError::unknown(format!("failed to parse Efí response: {}: {}", e, body))
    })
}

// Efí API response structures

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct CobResponse {
    txid: String,
    #[serde(default)]
    loc: Option<CobLocation>,
}

#[derive(Debug, Deserialize)]
struct CobLocation {
    id: u64,
}
