use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use pk_core::ports::FileReaderPort;
use pk_core::upload::{CandidateFile, DataUrl, FileContent};
use tokio::fs;
use tracing::debug;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Reads candidate files into `data:` URLs.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDataUrlReader;

impl FsDataUrlReader {
    pub fn new() -> Self {
        Self
    }

    async fn load(&self, content: &FileContent) -> Result<Bytes> {
        match content {
            FileContent::Memory(bytes) => Ok(bytes.clone()),
            FileContent::Disk(path) => fs::read(path)
                .await
                .map(Bytes::from)
                .with_context(|| format!("read file for preview failed: {}", path.display())),
        }
    }
}

#[async_trait]
impl FileReaderPort for FsDataUrlReader {
    async fn read_as_data_url(&self, file: &CandidateFile) -> Result<DataUrl> {
        let bytes = self.load(&file.content).await?;
        let mime = if file.mime_type.is_unknown() {
            FALLBACK_MIME
        } else {
            file.mime_type.as_str()
        };
        debug!(name = %file.name, len = bytes.len(), "encoded preview");
        Ok(DataUrl::new(format!(
            "data:{mime};base64,{}",
            STANDARD.encode(&bytes)
        )))
    }
}
