use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use log::{debug, warn};
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// The seam between the quiz pipeline and the model provider. Handlers only
/// ever see this trait, so tests can drive the full pipeline with a stub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends a prompt and returns the model's raw text reply.
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Chat-completion client for any OpenAI-compatible endpoint. Requests are
/// sent with temperature 0 so repeated calls are as deterministic as the
/// provider allows. Retries, if any, are the client library's concern.
pub struct OpenAiLlmClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl OpenAiLlmClient {
    pub fn new(config: &Config) -> Self {
        let openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());

        Self {
            client: Client::with_config(openai_config),
            model_name: config.openai_model.clone(),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiLlmClient {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        debug!(
            "calling chat completion, model: {}, prompt length: {} chars",
            self.model_name,
            prompt.len()
        );

        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| AppError::ServiceError(format!("failed to build LLM request: {}", e)))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_message)])
            .temperature(0.0)
            .build()
            .map_err(|e| AppError::ServiceError(format!("failed to build LLM request: {}", e)))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM provider call failed: {}", e);
            AppError::ServiceError(format!("LLM provider call failed: {}", e))
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                AppError::ServiceError("LLM returned an empty completion".to_string())
            })?;

        Ok(content)
    }
}
