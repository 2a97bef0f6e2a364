use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::AppResult,
    models::dto::completion::{ChatCompletionRequest, ChatCompletionResponse},
};

/// Sends one chat-completion request and returns the reply text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: ChatCompletionRequest) -> AppResult<String>;
}

pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(&config.openai_api_base);

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, request: ChatCompletionRequest) -> AppResult<String> {
        log::debug!(
            "Requesting completion from model {} (temperature {})",
            request.model,
            request.temperature
        );

        // Error replies arrive either as a non-2xx status or as an `error` field.
        let response: ChatCompletionResponse = self.client.chat().create_byot(request).await?;
        response.into_content()
    }
}
