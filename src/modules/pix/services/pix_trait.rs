use std::sync::Arc;

use async_trait::async_trait;

use super::super::models::{ChargeRequest, CreatedCharge, ProviderError, QrCode};
use crate::config::ProviderClientConfig;
use crate::core::ConfigError;

/// Pix provider operations used to issue a charge
#[async_trait]
pub trait PixApi: Send + Sync {
    /// Create an immediate charge (`cob`) and return its identifiers
    async fn create_immediate_charge(
        &self,
        request: &ChargeRequest,
    ) -> Result<CreatedCharge, ProviderError>;

    /// Generate the QR code for a charge created by this provider
    async fn generate_qr_code(&self, charge: &CreatedCharge) -> Result<QrCode, ProviderError>;
}

/// Builds a fresh provider client from resolved configuration
pub trait PixConnector: Send + Sync {
    fn connect(&self, config: &ProviderClientConfig) -> Result<Arc<dyn PixApi>, ConfigError>;
}
