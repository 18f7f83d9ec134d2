use anyhow::Result;

use crate::upload::{CandidateFile, DataUrl};

/// Host capability that turns a file's bytes into a displayable URL.
///
/// This is the only suspension point of the upload flow: callers must not
/// block while it runs.
#[async_trait::async_trait]
pub trait FileReaderPort: Send + Sync {
    async fn read_as_data_url(&self, file: &CandidateFile) -> Result<DataUrl>;
}

