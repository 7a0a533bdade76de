//! Configuration module for GhostVault
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::GhostVaultPaths;
pub use settings::Settings;
