//! Configuration file parsing for Folio
//!
//! Supports:
//! - `.folio/config.toml` - Frame override, transition and registry settings

pub mod settings;
pub mod types;

pub use settings::{
    config_path, init_config_dir, load_settings, parse_settings, read_settings, save_settings,
};
pub use types::*;
