use async_trait::async_trait;

/// TTS interface trait
#[async_trait]
pub trait TTSInterface: Send + Sync {
    /// Generate speech audio from text asynchronously
    ///
    /// # Arguments
    /// * `text` - The text to synthesize
    ///
    /// # Returns
    /// The complete encoded audio
    async fn generate_audio(&self, text: &str) -> Result<Vec<u8>, anyhow::Error>;
}
