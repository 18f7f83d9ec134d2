use super::file::{CandidateFile, DataUrl};
use super::state::ReadToken;

/// How a selection reached the widget. Both paths behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Picker,
    Drop,
}

/// Drag lifecycle phases before the drop itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
}

/// Events that drive an upload widget.
///
/// 驱动上传组件的事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    /// Files chosen through the picker (or forwarded from a drop).
    /// Only the first file is used.
    FilesSelected {
        files: Vec<CandidateFile>,
        source: SelectionSource,
    },
    /// Drag enter/over/leave on the drop area.
    Drag(DragPhase),
    /// Files dropped onto the drop area.
    Dropped { files: Vec<CandidateFile> },
    /// Host finished reading the file for `token`.
    ReadSucceeded { token: ReadToken, data_url: DataUrl },
    /// Host failed to read the file for `token`.
    ReadFailed { token: ReadToken, reason: String },
    /// User removed the selection.
    Clear,
}

impl UploadEvent {
    /// Short name for logs; never includes file payloads.
    pub fn name(&self) -> &'static str {
        match self {
            UploadEvent::FilesSelected {
                source: SelectionSource::Picker,
                ..
            } => "files_selected",
            UploadEvent::FilesSelected {
                source: SelectionSource::Drop,
                ..
            } => "files_selected_by_drop",
            UploadEvent::Drag(DragPhase::Enter) => "drag_enter",
            UploadEvent::Drag(DragPhase::Over) => "drag_over",
            UploadEvent::Drag(DragPhase::Leave) => "drag_leave",
            UploadEvent::Dropped { .. } => "dropped",
            UploadEvent::ReadSucceeded { .. } => "read_succeeded",
            UploadEvent::ReadFailed { .. } => "read_failed",
            UploadEvent::Clear => "clear",
        }
    }
}
