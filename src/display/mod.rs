//! Display formatting for terminal output

pub mod status;

pub use status::{format_config, format_vault_status};
