use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

const MAX_EXTENSION_LEN: usize = 8;

/// An uploaded utterance written to a uniquely named temporary file.
///
/// The file is removed when the guard is dropped, on success and error paths alike.
pub struct TempAudioFile {
    file: NamedTempFile,
}

impl TempAudioFile {
    /// Write `bytes` to a fresh temp file ending in `extension` (e.g. `.webm`) and flush it.
    pub fn create(bytes: &[u8], extension: &str) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("talkmate-")
            .suffix(extension)
            .tempfile()
            .context("Failed to create temporary audio file")?;

        file.write_all(bytes)
            .context("Failed to write temporary audio file")?;
        file.flush()
            .context("Failed to flush temporary audio file")?;

        debug!("Wrote {} bytes to {}", bytes.len(), file.path().display());
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Extension hint taken from an upload's file name, e.g. `user_audio.webm` gives `.webm`.
pub fn extension_hint(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name).extension()?.to_str()?;
    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(format!(".{}", ext.to_ascii_lowercase()))
}
