//! # Configuration System
//!
//! Centralized configuration for the sync installation.
//!
//! This crate provides:
//! - Configuration structures for the vault, Connect API, and state file
//! - Environment variable loading (12-factor app principles)
//! - Configuration file loading (TOML/YAML)
//! - Configuration precedence (CLI > env > file > defaults)
//! - Configuration validation
//!
//! The resolved [`Config`] is built once at startup and handed to the
//! engine and its collaborators; no component reads configuration
//! ambiently.

pub mod config;
pub mod file_loader;
pub mod loader;
pub mod precedence;

pub use config::{Config, ConnectConfig, StateConfig, VaultConfig};
pub use file_loader::{ConfigFileError, load_from_file, load_from_toml, load_from_yaml};
pub use loader::load_from_env;
pub use precedence::{merge_configs, resolve};
pub use validator::Validate;
