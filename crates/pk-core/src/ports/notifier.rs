use anyhow::Result;

use crate::notice::Notice;

/// Notification service injected into components that surface messages.
#[async_trait::async_trait]
pub trait NotifierPort: Send + Sync {
    /// Show `notice`; the implementation removes it once its ttl elapses.
    async fn notify(&self, notice: Notice) -> Result<()>;
}

