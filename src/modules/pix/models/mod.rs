pub mod charge;
pub mod provider_error;

pub use charge::{ChargeRequest, ChargeResult, CreatedCharge, QrCode};
pub use provider_error::{FieldError, ProviderError};
