pub mod charge_service;
pub mod efi;
pub mod pix_trait;

pub use charge_service::PixChargeService;
pub use efi::{EfiConnector, EfiPixClient};
pub use pix_trait::{PixApi, PixConnector};
