use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatCompletionRequest {
    pub fn user_prompt(model: &str, prompt: String, temperature: f32) -> Self {
        ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub error: Option<UpstreamError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamError {
    #[serde(default)]
    pub message: String,
}

impl ChatCompletionResponse {
    /// Content of the first choice, or the upstream error if the payload carries one.
    pub fn into_content(self) -> AppResult<String> {
        if let Some(error) = self.error {
            return Err(AppError::ApiError(error.message));
        }

        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::ApiError("Completion response contained no message".to_string()))
    }
}
