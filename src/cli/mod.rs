//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod prompt;
pub mod settings;
pub mod vault;

pub use settings::{handle_burn, handle_config, handle_generate, Toggle};
pub use vault::{handle_clear, handle_open, handle_seal, handle_status, OpenArgs, SealArgs};
