use std::sync::Arc;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{debug, info};

use super::types::TurnResult;
use crate::agent::{StatelessLLMInterface, TutorReply, TUTOR_SYSTEM_PROMPT};
use crate::asr::ASRInterface;
use crate::error::TurnError;
use crate::openai_service::Message;
use crate::tts::TTSInterface;
use crate::utils::temp_audio::TempAudioFile;

/// Runs one tutoring turn: transcribe, ask the tutor, synthesize the reply.
///
/// Holds no per-request state, so a single instance serves concurrent requests.
pub struct AudioTurnProcessor {
    asr: Arc<dyn ASRInterface>,
    llm: Arc<dyn StatelessLLMInterface>,
    tts: Arc<dyn TTSInterface>,
    system_prompt: String,
    timeout: Option<Duration>,
}

impl AudioTurnProcessor {
    pub fn new(
        asr: Arc<dyn ASRInterface>,
        llm: Arc<dyn StatelessLLMInterface>,
        tts: Arc<dyn TTSInterface>,
    ) -> Self {
        Self {
            asr,
            llm,
            tts,
            system_prompt: TUTOR_SYSTEM_PROMPT.to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Process one uploaded utterance.
    ///
    /// `extension` is the container hint for the temp file, e.g. `.webm`.
    pub async fn process_turn(&self, audio: &[u8], extension: &str) -> Result<TurnResult, TurnError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.run_turn(audio, extension))
                .await
                .map_err(|_| TurnError::Timeout(limit))?,
            None => self.run_turn(audio, extension).await,
        }
    }

    async fn run_turn(&self, audio: &[u8], extension: &str) -> Result<TurnResult, TurnError> {
        let user_text = self.transcribe(audio, extension).await?;
        if user_text.trim().is_empty() {
            info!("No speech detected in {} byte upload", audio.len());
            return Ok(TurnResult::no_speech());
        }
        info!("Transcribed: {}", user_text);

        let tutor = self.ask_tutor(&user_text).await?;
        info!("Tutor reply: {}", tutor.reply);

        let audio_base64 = self.synthesize(&tutor.reply).await?;

        Ok(TurnResult {
            user_text,
            ai_text: tutor.reply,
            correction: tutor.correction,
            audio_base64,
        })
    }

    async fn transcribe(&self, audio: &[u8], extension: &str) -> Result<String, TurnError> {
        // Dropping the guard at the end of this scope deletes the file.
        let temp = TempAudioFile::create(audio, extension).map_err(TurnError::Internal)?;
        self.asr
            .transcribe_file(temp.path())
            .await
            .map_err(TurnError::Transcription)
    }

    async fn ask_tutor(&self, user_text: &str) -> Result<TutorReply, TurnError> {
        let content = self
            .llm
            .chat_completion(vec![Message::user(user_text)], Some(&self.system_prompt))
            .await
            .map_err(TurnError::ChatResponse)?;
        debug!("Raw tutor content: {}", content);

        TutorReply::parse(&content).map_err(|e| TurnError::ChatResponse(e.into()))
    }

    async fn synthesize(&self, text: &str) -> Result<String, TurnError> {
        let audio = self
            .tts
            .generate_audio(text)
            .await
            .map_err(TurnError::Synthesis)?;
        Ok(STANDARD.encode(audio))
    }
}
