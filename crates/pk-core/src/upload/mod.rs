//! Image upload gatekeeper and preview state machine.
//!
//! ```text
//! UploadStateMachine (pk-core)
//!   ├── State:  PreviewState + selected file + preview fields + read token
//!   ├── Event:  selection / drag / read completion / clear
//!   └── Action: view patches, async read requests, user-facing errors
//!
//! UploadController (pk-app)
//!   ├── receives host events
//!   ├── calls the state machine
//!   └── executes actions through ports
//! ```

pub mod action;
pub mod error;
pub mod event;
pub mod file;
pub mod mime;
pub mod policy;
pub mod size;
pub mod state;
pub mod state_machine;

pub use action::UploadAction;
pub use error::UploadError;
pub use event::{DragPhase, SelectionSource, UploadEvent};
pub use file::{CandidateFile, DataUrl, FileContent, FileDescriptor};
pub use mime::MimeType;
pub use policy::{UploadPolicy, ValidationVerdict, ALLOWED_IMAGE_TYPES, MAX_UPLOAD_BYTES};
pub use size::format_file_size;
pub use state::{FilePreview, PreviewState, ReadToken, UploadState};
pub use state_machine::UploadStateMachine;
