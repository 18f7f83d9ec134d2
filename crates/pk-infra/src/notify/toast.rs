use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use pk_core::ports::NotifierPort;
use pk_core::{Notice, NoticeId};
use tokio::sync::{mpsc, Mutex};
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::{debug, info};

/// Lifecycle of a toast, as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    Shown(Notice),
    Dismissed(NoticeId),
}

/// Notifier that keeps the currently visible toasts and drops each one
/// when its ttl elapses.
///
/// 通知器：保存当前可见的提示，并在 ttl 到期后移除。
#[derive(Clone, Default)]
pub struct ToastNotifier {
    visible: Arc<Mutex<Vec<Notice>>>,
    timers: Arc<Mutex<HashMap<NoticeId, AbortHandle>>>,
    events: Option<mpsc::UnboundedSender<ToastEvent>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier that also reports show/dismiss events on the returned channel.
    pub fn with_events() -> (Self, mpsc::UnboundedReceiver<ToastEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let notifier = Self {
            events: Some(tx),
            ..Self::default()
        };
        (notifier, rx)
    }

    /// Toasts currently on screen, oldest first.
    pub async fn visible(&self) -> Vec<Notice> {
        self.visible.lock().await.clone()
    }

    /// Removes a toast before its ttl elapses. Returns false if it was
    /// already gone.
    pub async fn dismiss(&self, id: &NoticeId) -> bool {
        if let Some(handle) = self.timers.lock().await.remove(id) {
            handle.abort();
        }
        remove_notice(&self.visible, self.events.as_ref(), id).await
    }
}

async fn remove_notice(
    visible: &Mutex<Vec<Notice>>,
    events: Option<&mpsc::UnboundedSender<ToastEvent>>,
    id: &NoticeId,
) -> bool {
    let mut guard = visible.lock().await;
    let before = guard.len();
    guard.retain(|notice| &notice.id != id);
    let removed = guard.len() != before;
    drop(guard);

    if removed {
        debug!(notice_id = %id, "toast dismissed");
        if let Some(tx) = events {
            // A closed receiver only means nobody renders anymore.
            let _ = tx.send(ToastEvent::Dismissed(id.clone()));
        }
    }
    removed
}

#[async_trait]
impl NotifierPort for ToastNotifier {
    async fn notify(&self, notice: Notice) -> Result<()> {
        info!(
            notice_id = %notice.id,
            level = ?notice.level,
            message = %notice.message,
            "toast shown"
        );

        let id = notice.id.clone();
        let ttl = notice.ttl;
        self.visible.lock().await.push(notice.clone());
        if let Some(tx) = &self.events {
            let _ = tx.send(ToastEvent::Shown(notice));
        }

        let visible = Arc::clone(&self.visible);
        let timers = Arc::clone(&self.timers);
        let events = self.events.clone();
        let expired = id.clone();

        let mut timers_guard = self.timers.lock().await;
        let handle = tokio::spawn(async move {
            sleep(ttl).await;
            timers.lock().await.remove(&expired);
            remove_notice(&visible, events.as_ref(), &expired).await;
        });
        timers_guard.insert(id, handle.abort_handle());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::advance;

    #[tokio::test]
    async fn notice_disappears_after_ttl() -> anyhow::Result<()> {
        tokio::time::pause();
        let notifier = ToastNotifier::new();

        notifier.notify(Notice::error("boom")).await?;
        assert_eq!(notifier.visible().await.len(), 1);

        advance(Duration::from_millis(4_999)).await;
        tokio::task::yield_now().await;
        assert_eq!(notifier.visible().await.len(), 1);

        advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert!(notifier.visible().await.is_empty());
        assert!(notifier.timers.lock().await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn notices_expire_independently() -> anyhow::Result<()> {
        tokio::time::pause();
        let notifier = ToastNotifier::new();

        notifier.notify(Notice::error("first")).await?;
        notifier.notify(Notice::success("second")).await?;

        advance(Duration::from_secs(3)).await;
        tokio::task::yield_now().await;
        let remaining = notifier.visible().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "first");

        advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert!(notifier.visible().await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn dismiss_cancels_timer_and_reports_event() -> anyhow::Result<()> {
        tokio::time::pause();
        let (notifier, mut events) = ToastNotifier::with_events();
        let notice = Notice::error("boom");
        let id = notice.id.clone();

        notifier.notify(notice.clone()).await?;
        assert_eq!(events.recv().await, Some(ToastEvent::Shown(notice)));

        assert!(notifier.dismiss(&id).await);
        assert_eq!(events.recv().await, Some(ToastEvent::Dismissed(id.clone())));
        assert!(!notifier.dismiss(&id).await);

        advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;
        assert!(events.try_recv().is_err());
        Ok(())
    }
}
