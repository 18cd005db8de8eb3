use std::path::Path;

use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One authenticated client for the transcription, chat and speech endpoints.
#[derive(Debug, Clone)]
pub struct OpenAIServiceClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SpeechRequest {
    pub model: String,
    pub input: String,
    pub voice: String,
    pub response_format: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAIServiceClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Upload the audio file at `audio_path` and return the transcript.
    pub async fn transcribe(&self, audio_path: &Path, model: &str) -> Result<String> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let audio_bytes = tokio::fs::read(audio_path)
            .await
            .with_context(|| format!("Failed to read audio file {}", audio_path.display()))?;
        let file_name = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "audio.webm".to_string());

        debug!(file_name, bytes = audio_bytes.len(), model, "Sending audio for transcription");

        let file_part = reqwest::multipart::Part::bytes(audio_bytes)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", model.to_string());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .context("Failed to send audio for transcription")?;
        let response = check_status(response, "transcription").await?;

        let result: TranscriptionResponse = response
            .json()
            .await
            .context("Failed to parse transcription response")?;
        Ok(result.text)
    }

    /// Run a chat completion and return the first choice's message content.
    pub async fn chat(&self, request: &ChatCompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %request.model, messages = request.messages.len(), "Sending chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .context("Failed to send chat completion request")?;
        let response = check_status(response, "chat completion").await?;

        let result: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse chat completion response")?;

        result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| anyhow::anyhow!("Chat completion returned no message content"))
    }

    /// Synthesize speech and read the whole audio body.
    pub async fn synthesize_speech(&self, request: &SpeechRequest) -> Result<Vec<u8>> {
        let url = format!("{}/audio/speech", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .context("Failed to send speech synthesis request")?;
        let response = check_status(response, "speech synthesis").await?;

        let audio = response
            .bytes()
            .await
            .context("Failed to read synthesized audio stream")?;

        debug!(
            bytes = audio.len(),
            voice = %request.voice,
            format = %request.response_format,
            "Speech synthesized"
        );
        Ok(audio.to_vec())
    }
}

async fn check_status(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    anyhow::bail!("OpenAI {} error ({}): {}", what, status, body)
}
