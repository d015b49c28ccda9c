//! Core types, configuration, and utilities for the account client core.

mod config;
mod error;
mod logging;
mod paths;

pub use config::{
    Config, DEFAULT_API_AUTH_HEADER, DEFAULT_API_BASE_URL, DEFAULT_CURRENCY_CODE, DEFAULT_LANG,
    DEFAULT_LOG_LEVEL,
};
pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use paths::Paths;
