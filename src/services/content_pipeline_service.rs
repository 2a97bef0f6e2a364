use std::sync::Arc;

use crate::{
    constants::prompts::{self, QUIZ_TEMPERATURE, SUMMARY_TEMPERATURE},
    errors::{AppError, AppResult},
    models::{domain::Quiz, dto::completion::ChatCompletionRequest},
    services::{completion_service::CompletionClient, quiz_parser},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedContent {
    pub summary: String,
    pub quiz: Quiz,
}

/// Turns raw content into a markdown summary and a multiple-choice quiz.
pub struct ContentPipelineService {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl ContentPipelineService {
    pub fn new(client: Arc<dyn CompletionClient>, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }

    /// Runs the summary request, then the quiz request. Every failure comes back as
    /// `ProcessingFailed` carrying the underlying message.
    pub async fn process_content(
        &self,
        content: &str,
        content_type: &str,
        source: &str,
    ) -> AppResult<ProcessedContent> {
        self.run(content, content_type, source).await.map_err(|e| {
            log::error!("AI processing error: {}", e);
            AppError::ProcessingFailed(e.to_string())
        })
    }

    async fn run(
        &self,
        content: &str,
        content_type: &str,
        source: &str,
    ) -> AppResult<ProcessedContent> {
        let summary_prompt = prompts::summary_prompt(content_type, source, content);
        let quiz_prompt = prompts::quiz_prompt(content_type, source, content);

        log::info!(
            "Requesting summary for {} content from {} ({} chars)",
            content_type,
            source,
            content.chars().count()
        );
        let summary = self
            .client
            .complete(ChatCompletionRequest::user_prompt(
                &self.model,
                summary_prompt,
                SUMMARY_TEMPERATURE,
            ))
            .await?;

        log::info!("Requesting quiz for {} content from {}", content_type, source);
        let quiz_reply = self
            .client
            .complete(ChatCompletionRequest::user_prompt(
                &self.model,
                quiz_prompt,
                QUIZ_TEMPERATURE,
            ))
            .await?;

        let quiz = quiz_parser::parse_quiz(&quiz_reply).map_err(|e| {
            log::error!("Error parsing quiz JSON: {}", e);
            e
        })?;

        log::info!("Generated summary and {} quiz questions", quiz.len());

        Ok(ProcessedContent { summary, quiz })
    }
}
