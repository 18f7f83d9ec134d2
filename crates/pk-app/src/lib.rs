//! pagekit application layer
//!
//! Use cases that drive the pure widget logic of `pk-core` from host events
//! and carry out the resulting actions through ports.

pub mod usecases;

pub use usecases::{
    DispatchOutcome, PasswordToggleBinding, PhoneMaskBinding, PhoneMaskGroup, UploadController,
    UploadControllerError,
};
