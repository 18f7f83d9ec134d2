//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `pk-app` and the
//! host environment (the page, a terminal, a test double). The core never
//! touches a widget directly; everything goes through these traits.

mod file_reader;
mod notifier;
mod password_field;
mod text_field;
mod upload_view;

pub use file_reader::FileReaderPort;
pub use notifier::NotifierPort;
pub use password_field::PasswordFieldPort;
pub use text_field::TextFieldPort;
pub use upload_view::{UploadViewPatch, UploadViewPort};

