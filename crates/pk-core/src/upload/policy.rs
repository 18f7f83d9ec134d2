use super::error::UploadError;
use super::file::CandidateFile;

/// Image types accepted by the uploader. `image/jpg` is a non-standard alias
/// some hosts report for JPEG.
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Upload size limit: 5 MiB, inclusive.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    Accepted,
    RejectedType,
    RejectedSize,
}

impl ValidationVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationVerdict::Accepted)
    }
}

/// Fixed type/size policy, evaluated before any async work starts.
pub struct UploadPolicy;

impl UploadPolicy {
    /// Type is checked before size: an oversized BMP is a type rejection.
    pub fn validate(file: &CandidateFile) -> ValidationVerdict {
        if !ALLOWED_IMAGE_TYPES.contains(&file.mime_type.as_str()) {
            return ValidationVerdict::RejectedType;
        }
        if file.size_bytes > MAX_UPLOAD_BYTES {
            return ValidationVerdict::RejectedSize;
        }
        ValidationVerdict::Accepted
    }

    /// Same check, shaped as the error the user will see.
    pub fn check(file: &CandidateFile) -> Result<(), UploadError> {
        match Self::validate(file) {
            ValidationVerdict::Accepted => Ok(()),
            ValidationVerdict::RejectedType => Err(UploadError::RejectedType {
                mime_type: file.mime_type.clone(),
            }),
            ValidationVerdict::RejectedSize => Err(UploadError::RejectedSize {
                size_bytes: file.size_bytes,
                limit_bytes: MAX_UPLOAD_BYTES,
            }),
        }
    }
}
