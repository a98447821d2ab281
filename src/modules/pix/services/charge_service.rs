use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{error, info};

use super::super::models::{ChargeRequest, ChargeResult, ProviderError};
use super::pix_trait::PixConnector;
use crate::config::ConfigResolver;
use crate::core::{money, AppError, Result};

/// Issues Pix charges: one immediate charge plus its QR code per call.
///
/// Configuration is resolved and a new provider client connected on every
/// call; nothing is shared between calls.
pub struct PixChargeService {
    resolver: ConfigResolver,
    connector: Arc<dyn PixConnector>,
}

impl PixChargeService {
    pub fn new(resolver: ConfigResolver, connector: Arc<dyn PixConnector>) -> Self {
        Self {
            resolver,
            connector,
        }
    }

    /// Create a charge for `amount` BRL, payable for `expiration_seconds`.
    ///
    /// # Errors
    /// - `AppError::Validation` for a non-positive amount or zero expiration
    /// - `AppError::Configuration` when configuration or the certificate is
    ///   unusable; no request is sent in that case
    /// - `AppError::PaymentCommunication` when either provider call fails.
    ///   If the QR code step fails the charge still exists at the provider;
    ///   its txid is only logged.
    pub async fn create_pix_charge(
        &self,
        amount: Decimal,
        expiration_seconds: u32,
    ) -> Result<ChargeResult> {
        money::validate_amount(amount).map_err(AppError::Validation)?;
        if expiration_seconds == 0 {
            return Err(AppError::validation("expiration must be greater than zero"));
        }

        let config = self.resolver.resolve()?;
        let settings = self.resolver.charge_settings()?;
        let api = self.connector.connect(&config)?;

        let request = ChargeRequest::new(amount, expiration_seconds, &settings);

        info!(
            amount = %request.amount(),
            expiration_seconds,
            sandbox = config.sandbox,
            "Creating Pix charge"
        );

        let charge = api
            .create_immediate_charge(&request)
            .await
            .map_err(|e| communication_failure("create_immediate_charge", None, e))?;

        let qr_code = api.generate_qr_code(&charge).await.map_err(|e| {
            communication_failure("generate_qr_code", Some(charge.txid.as_str()), e)
        })?;

        info!(txid = %charge.txid, "Pix charge and QR code created");

        Ok(ChargeResult::new(charge, qr_code))
    }
}

fn communication_failure(step: &str, txid: Option<&str>, e: ProviderError) -> AppError {
    error!(
        step,
        txid = txid.unwrap_or("-"),
        kind = e.kind(),
        detail = %e,
        "Pix provider call failed"
    );
    AppError::PaymentCommunication
}
