use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ChargeSettings;
use crate::core::format_brl;

/// Immediate charge payload (`POST /v2/cob`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeRequest {
    #[serde(rename = "calendario")]
    pub calendar: ChargeCalendar,

    #[serde(rename = "valor")]
    pub value: ChargeValue,

    #[serde(rename = "chave")]
    pub pix_key: String,

    #[serde(rename = "solicitacaoPagador")]
    pub payer_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeCalendar {
    /// Whole seconds, as a decimal string
    #[serde(rename = "expiracao")]
    pub expiration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeValue {
    /// Amount with exactly two fraction digits
    pub original: String,
}

impl ChargeRequest {
    pub fn new(amount: Decimal, expiration_seconds: u32, settings: &ChargeSettings) -> Self {
        let formatted = format_brl(amount);

        Self {
            calendar: ChargeCalendar {
                expiration: expiration_seconds.to_string(),
            },
            payer_note: format!("{} R${}", settings.payer_note_prefix, formatted),
            value: ChargeValue {
                original: formatted,
            },
            pix_key: settings.pix_key.clone(),
        }
    }

    pub fn amount(&self) -> &str {
        &self.value.original
    }

    pub fn expiration(&self) -> &str {
        &self.calendar.expiration
    }
}

/// Charge as created by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedCharge {
    pub txid: String,

    /// Payload location bound to the charge; QR codes are issued per location
    pub location_id: Option<u64>,
}

/// QR code representations of a charge
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QrCode {
    /// "Pix copia e cola" payload
    #[serde(rename = "qrcode", alias = "pix_copia_e_cola")]
    pub pix_copy_paste: String,

    /// Encoded image, usually a `data:image/png;base64,` URL
    #[serde(rename = "imagemQrcode", alias = "imagem_qrcode")]
    pub image: String,
}

/// Normalized result handed to the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeResult {
    pub transaction_id: String,
    pub pix_copy_paste_string: String,
    pub qr_code_image: String,
}

impl ChargeResult {
    pub fn new(charge: CreatedCharge, qr_code: QrCode) -> Self {
        Self {
            transaction_id: charge.txid,
            pix_copy_paste_string: qr_code.pix_copy_paste,
            qr_code_image: qr_code.image,
        }
    }
}
