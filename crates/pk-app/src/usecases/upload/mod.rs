//! Upload use cases.
//!
//! This module exposes the upload controller.

mod context;
pub mod controller;

pub use controller::{DispatchOutcome, UploadController, UploadControllerError};
