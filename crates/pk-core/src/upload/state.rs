use std::fmt;

use super::error::UploadError;
use super::file::{DataUrl, FileDescriptor};

/// Lifecycle phase of an upload widget.
///
/// 上传组件的生命周期阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PreviewState {
    /// Nothing selected.
    ///
    /// 未选择文件。
    #[default]
    Empty,
    /// A file passed validation and its preview is being read.
    ///
    /// 文件已通过校验，正在读取预览。
    Loading,
    /// Preview is shown for the selected file.
    ///
    /// 预览已显示。
    Active,
    /// The last read failed. Behaves like `Empty` for the next selection.
    ///
    /// 上次读取失败，后续选择按 `Empty` 处理。
    Errored,
}

/// Tag attached to each async read; only the latest one may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ReadToken(u64);

impl ReadToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ReadToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "read#{}", self.0)
    }
}

/// Fields shown by the preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub image_src: DataUrl,
    pub file_name: String,
    pub size_label: String,
}

/// Full state of one upload widget.
///
/// Owned by exactly one controller; mutated only through
/// [`UploadStateMachine::transition`](super::UploadStateMachine::transition).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadState {
    pub(crate) phase: PreviewState,
    pub(crate) selected: Option<FileDescriptor>,
    pub(crate) preview: Option<FilePreview>,
    pub(crate) pending: Option<ReadToken>,
    pub(crate) last_issued: ReadToken,
    pub(crate) last_error: Option<UploadError>,
    pub(crate) highlighted: bool,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PreviewState {
        self.phase
    }

    /// File currently associated with the widget (being read or previewed).
    pub fn selected(&self) -> Option<&FileDescriptor> {
        self.selected.as_ref()
    }

    /// Preview currently on screen. During a replacement read this is still
    /// the previous file's preview.
    pub fn preview(&self) -> Option<&FilePreview> {
        self.preview.as_ref()
    }

    pub fn pending_read(&self) -> Option<ReadToken> {
        self.pending
    }

    pub fn last_error(&self) -> Option<&UploadError> {
        self.last_error.as_ref()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn has_file(&self) -> bool {
        self.phase == PreviewState::Active
    }
}
