pub mod models;
pub mod services;

pub use models::{
    ChargeRequest, ChargeResult, CreatedCharge, FieldError, ProviderError, QrCode,
};
pub use services::{EfiConnector, EfiPixClient, PixApi, PixChargeService, PixConnector};
