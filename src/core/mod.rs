pub mod error;
pub mod money;

pub use error::{AppError, ConfigError, Result};
pub use money::format_brl;
