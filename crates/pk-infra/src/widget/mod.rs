mod memory;

pub use memory::{MemoryPasswordField, MemoryTextField, RecordingUploadView, UploadViewSnapshot};
