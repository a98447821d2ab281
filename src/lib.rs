//! Pix charge issuing for the Efí Pay API
//!
//! Resolves provider configuration, creates an immediate Pix charge and
//! fetches its QR code, returning one normalized result to the caller.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::config::{ConfigResolver, ConfigSource, EnvSource, MapSource};
pub use crate::core::{AppError, ConfigError, Result};
pub use crate::modules::pix;
pub use crate::modules::pix::{ChargeResult, EfiConnector, PixChargeService};
