use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::path::PathBuf;

use crate::config::Environment;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Caller input rejected before any provider work
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors (fatal, never retried)
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Any failure talking to the payment provider. The provider detail is
    /// logged where it happens and never carried in this variant.
    #[error("Payment provider communication failed")]
    PaymentCommunication,
}

/// Failures resolving the provider client configuration
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("EFI_CERTIFICATE_PATH is not set")]
    MissingCertificatePath,

    #[error("certificate file not found at {}", .path.display())]
    CertificateNotFound { path: PathBuf },

    #[error("{environment} client credentials are not set")]
    MissingCredentials { environment: Environment },

    #[error("EFI_PIX_KEY is not set")]
    MissingPixKey,

    #[error("certificate at {} is unusable: {reason}", .path.display())]
    InvalidCertificate { path: PathBuf, reason: String },
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.public_message();

        if let AppError::Configuration(e) = self {
            tracing::error!(error = %e, "Rejecting request: payment configuration error");
        }

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PaymentCommunication => StatusCode::BAD_GATEWAY,
        }
    }
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Message safe to show to the frontend; configuration details (file
    /// paths, key names) stay in the logs
    pub fn public_message(&self) -> String {
        match self {
            AppError::Configuration(_) => "Payment service is not configured".to_string(),
            other => other.to_string(),
        }
    }

    /// Returns the configuration failure kind, if this is one
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            AppError::Configuration(e) => Some(e),
            _ => None,
        }
    }
}
