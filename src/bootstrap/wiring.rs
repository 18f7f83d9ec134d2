//! Dependency wiring: connects the upload controller to its adapters.

use std::sync::Arc;

use pk_app::UploadController;
use pk_core::PageConfig;
use pk_infra::{FsDataUrlReader, RecordingUploadView, ToastEvent, ToastNotifier};
use tokio::sync::mpsc;

/// Everything the upload command needs, already connected.
pub struct UploadWiring {
    pub controller: UploadController,
    pub view: Arc<RecordingUploadView>,
    pub notifier: ToastNotifier,
    pub toasts: mpsc::UnboundedReceiver<ToastEvent>,
}

pub fn wire_upload(config: &PageConfig) -> UploadWiring {
    let (notifier, toasts) = ToastNotifier::with_events();
    let view = Arc::new(RecordingUploadView::new(
        config.upload.idle_text.clone(),
        config.upload.select_button.clone(),
    ));
    let controller = UploadController::new(
        Arc::new(FsDataUrlReader::new()),
        view.clone(),
        Arc::new(notifier.clone()),
        config,
    );

    UploadWiring {
        controller,
        view,
        notifier,
        toasts,
    }
}
