//! Fakes for the three upstream capabilities, with call counters.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::agent::StatelessLLMInterface;
use crate::asr::ASRInterface;
use crate::conversations::AudioTurnProcessor;
use crate::openai_service::Message;
use crate::tts::TTSInterface;

pub struct FakeASR {
    result: Result<String, String>,
    delay: Option<Duration>,
    pub calls: AtomicUsize,
    /// Path seen by the last call and whether it existed at that moment
    pub seen: Mutex<Option<(PathBuf, bool)>>,
}

impl FakeASR {
    pub fn returning(text: &str) -> Arc<Self> {
        Arc::new(Self::build(Ok(text.to_string()), None))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self::build(Err(message.to_string()), None))
    }

    pub fn slow(text: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self::build(Ok(text.to_string()), Some(delay)))
    }

    fn build(result: Result<String, String>, delay: Option<Duration>) -> Self {
        Self {
            result,
            delay,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(None),
        }
    }

    pub fn seen_path(&self) -> PathBuf {
        self.seen.lock().unwrap().as_ref().map(|(p, _)| p.clone()).unwrap()
    }

    pub fn existed_during_call(&self) -> bool {
        self.seen.lock().unwrap().as_ref().map(|(_, e)| *e).unwrap_or(false)
    }
}

#[async_trait]
impl ASRInterface for FakeASR {
    async fn transcribe_file(&self, audio_path: &Path) -> Result<String, anyhow::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.seen.lock().unwrap() = Some((audio_path.to_path_buf(), audio_path.exists()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone().map_err(|m| anyhow::anyhow!(m))
    }
}

pub struct FakeLLM {
    result: Result<String, String>,
    pub calls: AtomicUsize,
    pub last_request: Mutex<Option<(Vec<Message>, Option<String>)>>,
}

impl FakeLLM {
    pub fn returning(content: &str) -> Arc<Self> {
        Arc::new(Self::build(Ok(content.to_string())))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self::build(Err(message.to_string())))
    }

    fn build(result: Result<String, String>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }
}

#[async_trait]
impl StatelessLLMInterface for FakeLLM {
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        system: Option<&str>,
    ) -> Result<String, anyhow::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((messages, system.map(str::to_string)));
        self.result.clone().map_err(|m| anyhow::anyhow!(m))
    }
}

pub struct FakeTTS {
    result: Result<Vec<u8>, String>,
    pub calls: AtomicUsize,
    pub last_text: Mutex<Option<String>>,
}

impl FakeTTS {
    pub fn returning(audio: &[u8]) -> Arc<Self> {
        Arc::new(Self::build(Ok(audio.to_vec())))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self::build(Err(message.to_string())))
    }

    fn build(result: Result<Vec<u8>, String>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }
}

#[async_trait]
impl TTSInterface for FakeTTS {
    async fn generate_audio(&self, text: &str) -> Result<Vec<u8>, anyhow::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        self.result.clone().map_err(|m| anyhow::anyhow!(m))
    }
}

pub fn processor(asr: &Arc<FakeASR>, llm: &Arc<FakeLLM>, tts: &Arc<FakeTTS>) -> AudioTurnProcessor {
    AudioTurnProcessor::new(asr.clone(), llm.clone(), tts.clone())
}

pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
