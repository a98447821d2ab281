// Mock Pix provider
//
// Scripted PixApi/PixConnector pair that records every call, so tests can
// assert which provider operations ran and with what input.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pixcharge::config::ProviderClientConfig;
use pixcharge::pix::{
    ChargeRequest, CreatedCharge, PixApi, PixConnector, ProviderError, QrCode,
};
use pixcharge::ConfigError;

pub const TXID: &str = "TXID123";
pub const PIX_COPY_PASTE: &str = "00020126580014br.gov.bcb.pix0136loja@gamerstore.com.br";
pub const QR_IMAGE: &str = "data:image/png;base64,AAA";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateCharge(ChargeRequest),
    GenerateQrCode(CreatedCharge),
}

pub struct MockPix {
    charge_response: Result<CreatedCharge, ProviderError>,
    qr_response: Result<QrCode, ProviderError>,
    calls: Mutex<Vec<Call>>,
}

impl MockPix {
    /// Provider that accepts every charge
    pub fn succeeding() -> Self {
        Self {
            charge_response: Ok(CreatedCharge {
                txid: TXID.to_string(),
                location_id: Some(789),
            }),
            qr_response: Ok(QrCode {
                pix_copy_paste: PIX_COPY_PASTE.to_string(),
                image: QR_IMAGE.to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_charge(error: ProviderError) -> Self {
        Self {
            charge_response: Err(error),
            ..Self::succeeding()
        }
    }

    pub fn failing_qr_code(error: ProviderError) -> Self {
        Self {
            qr_response: Err(error),
            ..Self::succeeding()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PixApi for MockPix {
    async fn create_immediate_charge(
        &self,
        request: &ChargeRequest,
    ) -> Result<CreatedCharge, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::CreateCharge(request.clone()));
        self.charge_response.clone()
    }

    async fn generate_qr_code(&self, charge: &CreatedCharge) -> Result<QrCode, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::GenerateQrCode(charge.clone()));
        self.qr_response.clone()
    }
}

/// Hands out the same MockPix and counts connections
pub struct MockConnector {
    api: Arc<MockPix>,
    connect_error: Option<ConfigError>,
    connects: AtomicUsize,
    last_config: Mutex<Option<ProviderClientConfig>>,
}

impl MockConnector {
    pub fn new(api: MockPix) -> Self {
        Self {
            api: Arc::new(api),
            connect_error: None,
            connects: AtomicUsize::new(0),
            last_config: Mutex::new(None),
        }
    }

    pub fn refusing(error: ConfigError) -> Self {
        Self {
            connect_error: Some(error),
            ..Self::new(MockPix::succeeding())
        }
    }

    pub fn api(&self) -> &MockPix {
        &self.api
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn last_config(&self) -> Option<ProviderClientConfig> {
        self.last_config.lock().unwrap().clone()
    }
}

impl PixConnector for MockConnector {
    fn connect(&self, config: &ProviderClientConfig) -> Result<Arc<dyn PixApi>, ConfigError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        *self.last_config.lock().unwrap() = Some(config.clone());

        if let Some(error) = &self.connect_error {
            return Err(error.clone());
        }

        Ok(self.api.clone() as Arc<dyn PixApi>)
    }
}
