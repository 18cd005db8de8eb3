use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::interface::TTSInterface;
use crate::openai_service::{OpenAIServiceClient, SpeechRequest};

/// TTS client with a fixed model, voice and output encoding
pub struct TTSClient {
    service: Arc<OpenAIServiceClient>,
    model: String,
    voice: String,
    response_format: String,
}

impl TTSClient {
    /// Create a new TTS client
    pub fn new(
        service: Arc<OpenAIServiceClient>,
        model: String,
        voice: String,
        response_format: String,
    ) -> Self {
        Self {
            service,
            model,
            voice,
            response_format,
        }
    }

    fn build_request(&self, text: &str) -> SpeechRequest {
        SpeechRequest {
            model: self.model.clone(),
            input: text.to_string(),
            voice: self.voice.clone(),
            response_format: self.response_format.clone(),
        }
    }
}

#[async_trait]
impl TTSInterface for TTSClient {
    async fn generate_audio(&self, text: &str) -> Result<Vec<u8>, anyhow::Error> {
        debug!("Sending TTS request: voice={}, chars={}", self.voice, text.len());
        self.service.synthesize_speech(&self.build_request(text)).await
    }
}
