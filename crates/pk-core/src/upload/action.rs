use super::error::UploadError;
use super::file::CandidateFile;
use super::state::{FilePreview, ReadToken};

/// Side effects requested by a transition.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadAction {
    /// Keep the host from handling the event itself (e.g. navigating to a dropped file).
    SuppressDefault,
    /// Toggle the cosmetic drag-over highlight.
    SetHighlight(bool),
    /// Read `file` into a displayable URL; report back with `token`.
    StartRead { token: ReadToken, file: CandidateFile },
    /// Show preview fields, mark the widget as holding a file, switch labels.
    ShowPreview(FilePreview),
    /// Clear preview fields, reset the input's stored value, restore labels.
    ResetPreview,
    /// Tell the user something went wrong.
    ReportError(UploadError),
}
