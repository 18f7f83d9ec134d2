//! Transient user notices (toasts).

use std::time::Duration;

use crate::ids::NoticeId;

/// Default display time for error notices.
pub const ERROR_NOTICE_TTL: Duration = Duration::from_secs(5);

/// Default display time for success notices.
pub const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Error,
    Success,
}

/// A message shown to the user and removed after `ttl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub level: NoticeLevel,
    pub message: String,
    pub ttl: Duration,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message, ERROR_NOTICE_TTL)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message, SUCCESS_NOTICE_TTL)
    }

    pub fn new(level: NoticeLevel, message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            id: NoticeId::new(),
            level,
            message: message.into(),
            ttl,
        }
    }

    pub fn with_ttl(self, ttl: Duration) -> Self {
        Self { ttl, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_defaults_per_level() {
        let error = Notice::error("boom");
        assert_eq!(error.level, NoticeLevel::Error);
        assert_eq!(error.ttl, Duration::from_secs(5));

        let ok = Notice::success("done").with_ttl(Duration::from_millis(10));
        assert_eq!(ok.level, NoticeLevel::Success);
        assert_eq!(ok.ttl, Duration::from_millis(10));
    }
}
