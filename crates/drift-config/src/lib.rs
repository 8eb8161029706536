//! Configuration and file locations for drift-editor
//!
//! This crate provides:
//! - Directory paths for config and cache files
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, BackspaceMode, TriggerPlacement};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};
