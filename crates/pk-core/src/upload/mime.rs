use serde::{Deserialize, Serialize};
use std::fmt;

/// MIME type as reported by the host for a candidate file.
///
/// An empty string is a legal value: hosts report it for unknown types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MimeType(pub String);

impl MimeType {
    pub fn image_jpeg() -> Self {
        Self("image/jpeg".into())
    }
    pub fn image_png() -> Self {
        Self("image/png".into())
    }
    pub fn image_gif() -> Self {
        Self("image/gif".into())
    }
    pub fn image_webp() -> Self {
        Self("image/webp".into())
    }
    pub fn unknown() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MimeType {
    fn from(s: &str) -> Self {
        MimeType(s.to_string())
    }
}
