pub mod fs;
pub mod notify;
pub mod widget;

pub use fs::{candidate_from_path, FsDataUrlReader};
pub use notify::{ToastEvent, ToastNotifier};
pub use widget::{MemoryPasswordField, MemoryTextField, RecordingUploadView, UploadViewSnapshot};
