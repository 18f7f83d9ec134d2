use std::sync::Arc;

use pk_core::UploadState;
use tokio::sync::Mutex;

/// State of one upload widget plus the lock serializing its dispatches.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
#[derive(Clone)]
pub struct UploadContext {
    state: Arc<Mutex<UploadState>>,
    /// Held for the whole transition + action execution, so a read
    /// completion never interleaves with a user event.
    dispatch_lock: Arc<Mutex<()>>,
}

impl UploadContext {
    pub fn new(initial_state: UploadState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn get_state(&self) -> UploadState {
        self.state.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Only call with `dispatch_lock` held.
    pub async fn set_state(&self, state: UploadState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }
}

impl Default for UploadContext {
    fn default() -> Self {
        Self::new(UploadState::new())
    }
}
