use anyhow::Result;

/// Rendering changes for an upload widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadViewPatch {
    /// Drag-over highlight on or off. Carries no data.
    Highlight(bool),
    /// Show the preview pane and mark the widget as holding a file.
    Preview {
        image_src: String,
        file_name: String,
        size_label: String,
        status_text: String,
        button_label: String,
    },
    /// Hide the preview, clear its fields, reset the file input's stored
    /// value and restore the idle labels.
    Cleared {
        status_text: String,
        button_label: String,
    },
}

#[async_trait::async_trait]
pub trait UploadViewPort: Send + Sync {
    async fn apply(&self, patch: UploadViewPatch) -> Result<()>;
}
