mod cli;
mod client_error;
mod config;

pub use cli::Cli;
pub use client_error::ClientError;
pub use config::{CheckoutSettings, ServerSettings, Settings, StoreSettings, get_config_settings};
