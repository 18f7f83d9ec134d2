//! # pk-core
//!
//! Core domain models and widget logic for pagekit.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! hosts feed events in, the core answers with new state and actions.

// Public module exports
pub mod config;
pub mod ids;
pub mod notice;
pub mod password;
pub mod phone;
pub mod ports;
pub mod upload;

// Re-export commonly used types at the crate root
pub use config::PageConfig;
pub use ids::NoticeId;
pub use notice::{Notice, NoticeLevel};
pub use phone::{format_phone, DigitStream, FieldUpdate, FormattedPhone, MaskedField};
pub use upload::{
    format_file_size, CandidateFile, FileContent, FileDescriptor, MimeType, PreviewState,
    UploadError, UploadPolicy, UploadState, UploadStateMachine, ValidationVerdict,
};
