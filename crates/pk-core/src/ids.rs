use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Identifier of a transient notice (toast).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoticeId(String);

impl NoticeId {
    pub fn new() -> Self {
        NoticeId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for NoticeId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for NoticeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NoticeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
