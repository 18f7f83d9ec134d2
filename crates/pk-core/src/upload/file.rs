use bytes::Bytes;
use std::fmt;
use std::path::PathBuf;

use super::mime::MimeType;

/// Where the bytes of a candidate file live.
///
/// The core never looks inside; only the host's reader does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Memory(Bytes),
    Disk(PathBuf),
}

/// A file handed over by the host (picker or drop).
///
/// 宿主提供的候选文件（选择或拖放）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub mime_type: MimeType,
    pub size_bytes: u64,
    pub content: FileContent,
}

impl CandidateFile {
    pub fn in_memory(name: impl Into<String>, mime_type: MimeType, bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        Self {
            name: name.into(),
            mime_type,
            size_bytes: bytes.len() as u64,
            content: FileContent::Memory(bytes),
        }
    }

    pub fn descriptor(&self) -> FileDescriptor {
        FileDescriptor {
            name: self.name.clone(),
            mime_type: self.mime_type.clone(),
            size_bytes: self.size_bytes,
        }
    }
}

/// Payload-free view of a [`CandidateFile`], kept in widget state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub mime_type: MimeType,
    pub size_bytes: u64,
}

/// Browser-renderable URL produced by the host reader (`data:<mime>;base64,...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl(String);

impl DataUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
