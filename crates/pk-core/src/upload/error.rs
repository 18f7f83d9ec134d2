use thiserror::Error;

use super::mime::MimeType;

/// User-facing upload failures. None of them is fatal to the widget.
///
/// 上传错误：均可恢复，组件保持可交互。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("unsupported file type: {mime_type:?}")]
    RejectedType { mime_type: MimeType },

    #[error("file too large: {size_bytes} bytes (limit {limit_bytes})")]
    RejectedSize { size_bytes: u64, limit_bytes: u64 },

    #[error("failed to read file: {reason}")]
    ReadFailure { reason: String },
}
