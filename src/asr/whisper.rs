use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::interface::ASRInterface;
use crate::openai_service::OpenAIServiceClient;

/// Whisper transcription through the OpenAI audio endpoint.
pub struct WhisperASR {
    service: Arc<OpenAIServiceClient>,
    model: String,
}

impl WhisperASR {
    pub fn new(service: Arc<OpenAIServiceClient>, model: String) -> Self {
        info!("Initialized WhisperASR: model={}", model);
        Self { service, model }
    }
}

#[async_trait]
impl ASRInterface for WhisperASR {
    async fn transcribe_file(&self, audio_path: &Path) -> Result<String, anyhow::Error> {
        let text = self.service.transcribe(audio_path, &self.model).await?;
        debug!("Transcribed {} chars", text.len());
        Ok(text)
    }
}
