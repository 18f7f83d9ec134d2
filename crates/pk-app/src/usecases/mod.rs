//! Widget use cases.
//!
//! [host event]
//!      ↓
//! Binding / Controller   (this crate)
//!      ↓
//! pure core logic        (pk-core)
//!      ↓
//! actions → ports        (host adapters)

pub mod password_toggle;
pub mod phone_mask;
pub mod upload;

pub use password_toggle::PasswordToggleBinding;
pub use phone_mask::{PhoneMaskBinding, PhoneMaskGroup};
pub use upload::{DispatchOutcome, UploadController, UploadControllerError};
