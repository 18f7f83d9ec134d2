use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::password::ToggleAffordances;
use crate::upload::{format_file_size, UploadError};

/// Page configuration (pure data).
///
/// Every section falls back to its defaults when missing from the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub upload: UploadLabels,
    pub messages: MessagesConfig,
    pub notices: NoticesConfig,
    pub password: ToggleAffordances,
    pub logging: LoggingConfig,
}

/// Texts of the upload widget in its idle and has-file states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadLabels {
    pub idle_text: String,
    pub selected_text: String,
    pub select_button: String,
    pub change_button: String,
}

impl Default for UploadLabels {
    fn default() -> Self {
        Self {
            idle_text: "Click to upload a photo".to_string(),
            selected_text: "File selected".to_string(),
            select_button: "Select file".to_string(),
            change_button: "Change file".to_string(),
        }
    }
}

/// User-facing messages for upload outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub rejected_type: String,
    /// `{limit}` is replaced with the human-readable size limit.
    pub rejected_size: String,
    pub read_failure: String,
    /// `{name}` is replaced with the previewed file's name.
    pub preview_ready: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            rejected_type: "Please select a valid image (JPEG, PNG, GIF or WebP).".to_string(),
            rejected_size: "The image must be at most {limit}.".to_string(),
            read_failure: "Could not read the file. Please try again.".to_string(),
            preview_ready: "{name} is ready.".to_string(),
        }
    }
}

impl MessagesConfig {
    pub fn message_for(&self, error: &UploadError) -> String {
        match error {
            UploadError::RejectedType { .. } => self.rejected_type.clone(),
            UploadError::RejectedSize { limit_bytes, .. } => self
                .rejected_size
                .replace("{limit}", &format_file_size(*limit_bytes)),
            UploadError::ReadFailure { .. } => self.read_failure.clone(),
        }
    }

    pub fn preview_ready_for(&self, file_name: &str) -> String {
        self.preview_ready.replace("{name}", file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticesConfig {
    pub error_ttl_ms: u64,
    pub success_ttl_ms: u64,
}

impl Default for NoticesConfig {
    fn default() -> Self {
        Self {
            error_ttl_ms: 5_000,
            success_ttl_ms: 3_000,
        }
    }
}

impl NoticesConfig {
    pub fn error_ttl(&self) -> Duration {
        Duration::from_millis(self.error_ttl_ms)
    }

    pub fn success_ttl(&self) -> Duration {
        Duration::from_millis(self.success_ttl_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Create PageConfig from a parsed TOML value.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        toml_value
            .clone()
            .try_into()
            .context("Failed to map TOML into PageConfig")
    }
}
