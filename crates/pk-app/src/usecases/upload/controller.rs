//! Upload controller.
//!
//! Drives the upload state machine for one widget and executes its actions.

use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use pk_core::config::{MessagesConfig, PageConfig, UploadLabels};
use pk_core::ports::{FileReaderPort, NotifierPort, UploadViewPatch, UploadViewPort};
use pk_core::upload::{
    CandidateFile, PreviewState, ReadToken, UploadAction, UploadEvent, UploadState,
    UploadStateMachine,
};
use pk_core::Notice;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::context::UploadContext;

/// Errors produced by the upload controller.
///
/// Rejections and read failures are not errors here: they are reported to
/// the user and the widget stays usable. These cover broken host adapters.
#[derive(Debug, thiserror::Error)]
pub enum UploadControllerError {
    #[error("failed to update upload view: {0}")]
    View(#[source] anyhow::Error),
}

/// Result of dispatching one host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub state: PreviewState,
    /// The host must not run its default handling for the event.
    pub default_prevented: bool,
}

/// Controller bound to exactly one upload widget.
#[derive(Clone)]
pub struct UploadController {
    context: Arc<UploadContext>,
    reader: Arc<dyn FileReaderPort>,
    view: Arc<dyn UploadViewPort>,
    notifier: Arc<dyn NotifierPort>,
    labels: UploadLabels,
    messages: MessagesConfig,
    error_ttl: Duration,
    in_flight: Arc<StdMutex<Vec<JoinHandle<()>>>>,
}

impl UploadController {
    pub fn new(
        reader: Arc<dyn FileReaderPort>,
        view: Arc<dyn UploadViewPort>,
        notifier: Arc<dyn NotifierPort>,
        config: &PageConfig,
    ) -> Self {
        Self {
            context: Arc::new(UploadContext::default()),
            reader,
            view,
            notifier,
            labels: config.upload.clone(),
            messages: config.messages.clone(),
            error_ttl: config.notices.error_ttl(),
            in_flight: Arc::new(StdMutex::new(Vec::new())),
        }
    }

    pub async fn state(&self) -> UploadState {
        self.context.get_state().await
    }

    pub async fn dispatch(&self, event: UploadEvent) -> Result<DispatchOutcome, UploadControllerError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.upload_controller.dispatch", event = event.name());
        async {
            let (next, actions) = self.step(event).await;
            let default_prevented = actions
                .iter()
                .any(|action| matches!(action, UploadAction::SuppressDefault));

            // Every action runs even if the view fails, so a committed
            // `Loading` state always has its read in flight.
            let mut first_error = None;
            for action in actions {
                match action {
                    UploadAction::StartRead { token, file } => self.spawn_read(token, file),
                    other => {
                        if let Err(err) = self.execute(other).await {
                            error!(error = %err, "upload action failed");
                            first_error.get_or_insert(err);
                        }
                    }
                }
            }
            if let Some(err) = first_error {
                return Err(err);
            }

            Ok(DispatchOutcome {
                state: next,
                default_prevented,
            })
        }
        .instrument(span)
        .await
    }

    /// Clears the widget. Same as dispatching [`UploadEvent::Clear`].
    pub async fn clear(&self) -> Result<DispatchOutcome, UploadControllerError> {
        self.dispatch(UploadEvent::Clear).await
    }

    /// Waits until every read started so far has landed (or been discarded).
    pub async fn wait_for_reads(&self) {
        loop {
            let handles = match self.in_flight.lock() {
                Ok(mut guard) => std::mem::take(&mut *guard),
                Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
            };
            if handles.is_empty() {
                return;
            }
            for handle in handles {
                if let Err(err) = handle.await {
                    warn!(error = %err, "upload read task did not finish cleanly");
                }
            }
        }
    }

    async fn step(&self, event: UploadEvent) -> (PreviewState, Vec<UploadAction>) {
        let current = self.context.get_state().await;
        let from = current.phase();
        let event_name = event.name();
        let (next, actions) = UploadStateMachine::transition(current, event);
        let to = next.phase();
        if from != to {
            info!(?from, ?to, event = event_name, "upload state transition");
        }
        self.context.set_state(next).await;
        (to, actions)
    }

    fn spawn_read(&self, token: ReadToken, file: CandidateFile) {
        debug!(%token, name = %file.name, "starting preview read");
        let this = self.clone();
        let handle = tokio::spawn(
            async move { this.complete_read(token, file).await }
                .instrument(info_span!("usecase.upload_controller.read", %token)),
        );

        let mut guard = match self.in_flight.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.retain(|task| !task.is_finished());
        guard.push(handle);
    }

    async fn complete_read(&self, token: ReadToken, file: CandidateFile) {
        let event = match self.reader.read_as_data_url(&file).await {
            Ok(data_url) => UploadEvent::ReadSucceeded { token, data_url },
            Err(err) => {
                warn!(%token, error = %err, "preview read failed");
                UploadEvent::ReadFailed {
                    token,
                    reason: format!("{err:#}"),
                }
            }
        };

        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let (_, actions) = self.step(event).await;
        for action in actions {
            if let Err(err) = self.execute(action).await {
                error!(%token, error = %err, "failed to apply read completion");
            }
        }
    }

    async fn execute(&self, action: UploadAction) -> Result<(), UploadControllerError> {
        match action {
            UploadAction::SuppressDefault => {}
            UploadAction::SetHighlight(on) => self.apply(UploadViewPatch::Highlight(on)).await?,
            UploadAction::ShowPreview(preview) => {
                self.apply(UploadViewPatch::Preview {
                    image_src: preview.image_src.into_inner(),
                    file_name: preview.file_name,
                    size_label: preview.size_label,
                    status_text: self.labels.selected_text.clone(),
                    button_label: self.labels.change_button.clone(),
                })
                .await?
            }
            UploadAction::ResetPreview => {
                self.apply(UploadViewPatch::Cleared {
                    status_text: self.labels.idle_text.clone(),
                    button_label: self.labels.select_button.clone(),
                })
                .await?
            }
            UploadAction::ReportError(upload_error) => {
                info!(error = %upload_error, "upload error reported to user");
                let notice =
                    Notice::error(self.messages.message_for(&upload_error)).with_ttl(self.error_ttl);
                if let Err(err) = self.notifier.notify(notice).await {
                    warn!(error = %err, "failed to show upload notice");
                }
            }
            UploadAction::StartRead { token, .. } => {
                // Completions never start reads; a new read always comes from dispatch.
                warn!(%token, "unexpected read request outside dispatch");
            }
        }
        Ok(())
    }

    async fn apply(&self, patch: UploadViewPatch) -> Result<(), UploadControllerError> {
        self.view.apply(patch).await.map_err(UploadControllerError::View)
    }
}
