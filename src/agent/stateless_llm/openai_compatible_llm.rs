use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::stateless_llm_interface::StatelessLLMInterface;
use crate::openai_service::{ChatCompletionRequest, Message, OpenAIServiceClient, ResponseFormat};

/// OpenAI compatible LLM implementation
pub struct OpenAICompatibleLLM {
    model: String,
    temperature: f32,
    json_mode: bool,
    service: Arc<OpenAIServiceClient>,
}

impl OpenAICompatibleLLM {
    pub fn new(model: String, temperature: f32, service: Arc<OpenAIServiceClient>) -> Self {
        info!(
            "Initialized OpenAICompatibleLLM: model={}, temperature={}",
            model, temperature
        );
        Self {
            model,
            temperature,
            json_mode: false,
            service,
        }
    }

    /// Constrain every completion to a single JSON object.
    pub fn with_json_mode(mut self) -> Self {
        self.json_mode = true;
        self
    }

    fn build_request(&self, messages: Vec<Message>, system: Option<&str>) -> ChatCompletionRequest {
        let mut service_messages = Vec::with_capacity(messages.len() + 1);
        if let Some(sys) = system {
            service_messages.push(Message::system(sys));
        }
        service_messages.extend(messages);

        ChatCompletionRequest {
            model: self.model.clone(),
            messages: service_messages,
            temperature: self.temperature,
            response_format: self.json_mode.then(|| ResponseFormat {
                format_type: "json_object".to_string(),
            }),
        }
    }
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        system: Option<&str>,
    ) -> Result<String, anyhow::Error> {
        let request = self.build_request(messages, system);
        self.service.chat(&request).await
    }
}
