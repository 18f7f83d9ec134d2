//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file and maps it onto [`PageConfig`]. Missing sections and
//! keys fall back to the defaults declared on the DTO.

use std::path::{Path, PathBuf};

use anyhow::Context;
use pk_core::PageConfig;

/// Load configuration from a TOML file.
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read, is not valid TOML, or has
/// values of the wrong type.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<PageConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    PageConfig::from_toml(&toml_value)
}

/// Config from `path` when given, built-in defaults otherwise.
pub fn resolve_config(path: Option<&Path>) -> anyhow::Result<PageConfig> {
    match path {
        Some(path) => load_config(path.to_path_buf()),
        None => Ok(PageConfig::default()),
    }
}
