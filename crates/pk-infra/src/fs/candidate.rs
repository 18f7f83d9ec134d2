use std::path::Path;

use anyhow::{bail, Context, Result};
use pk_core::upload::{CandidateFile, FileContent, MimeType};
use tokio::fs;

/// Builds a [`CandidateFile`] for a file on disk, the way a file picker
/// would describe it: base name, size from metadata, MIME type from the
/// extension (empty when the extension is unknown).
pub async fn candidate_from_path(path: &Path) -> Result<CandidateFile> {
    let metadata = fs::metadata(path)
        .await
        .with_context(|| format!("stat candidate file failed: {}", path.display()))?;
    if !metadata.is_file() {
        bail!("not a regular file: {}", path.display());
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime_type = mime_guess::from_path(path)
        .first_raw()
        .map(MimeType::from)
        .unwrap_or_else(MimeType::unknown);

    Ok(CandidateFile {
        name,
        mime_type,
        size_bytes: metadata.len(),
        content: FileContent::Disk(path.to_path_buf()),
    })
}
