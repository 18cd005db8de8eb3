use std::sync::Arc;
use std::time::Duration;

use crate::agent::OpenAICompatibleLLM;
use crate::asr::WhisperASR;
use crate::config::Config;
use crate::conversations::AudioTurnProcessor;
use crate::openai_service::OpenAIServiceClient;
use crate::tts::TTSClient;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub processor: Arc<AudioTurnProcessor>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let openai = &config.openai;
        if openai.api_key.trim().is_empty() {
            anyhow::bail!("Cannot build upstream client without an API key");
        }
        let service = Arc::new(OpenAIServiceClient::new(
            openai.base_url.clone(),
            openai.api_key.clone(),
        ));

        let asr = Arc::new(WhisperASR::new(
            service.clone(),
            openai.transcription_model.clone(),
        ));
        let llm = Arc::new(
            OpenAICompatibleLLM::new(openai.chat_model.clone(), openai.temperature, service.clone())
                .with_json_mode(),
        );
        let tts = Arc::new(TTSClient::new(
            service,
            openai.tts_model.clone(),
            openai.tts_voice.clone(),
            openai.tts_format.clone(),
        ));

        let timeout = config.server.request_timeout_secs.map(Duration::from_secs);
        let processor = AudioTurnProcessor::new(asr, llm, tts).with_timeout(timeout);

        Ok(Self::with_processor(config, processor))
    }

    pub fn with_processor(config: Config, processor: AudioTurnProcessor) -> Self {
        Self {
            config: Arc::new(config),
            processor: Arc::new(processor),
        }
    }
}
