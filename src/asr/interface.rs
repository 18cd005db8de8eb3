use std::path::Path;

use async_trait::async_trait;

/// Speech-to-text over a named, seekable audio file.
#[async_trait]
pub trait ASRInterface: Send + Sync {
    /// Transcribe the audio file at `audio_path` into plain text.
    ///
    /// The text may be empty when no speech was detected.
    async fn transcribe_file(&self, audio_path: &Path) -> Result<String, anyhow::Error>;
}
