use std::sync::Arc;

use crate::{
    config::Config,
    repositories::InMemorySessionRepository,
    services::{
        completion_service::{CompletionClient, OpenAiCompletionClient},
        content_pipeline_service::ContentPipelineService,
        learning_session_service::LearningSessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub pipeline_service: Arc<ContentPipelineService>,
    pub session_service: Arc<LearningSessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(OpenAiCompletionClient::new(&config));
        Self::with_completion_client(config, client)
    }

    pub fn with_completion_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let pipeline_service = Arc::new(ContentPipelineService::new(client, &config.openai_model));

        let session_repository = Arc::new(InMemorySessionRepository::new());
        let session_service = Arc::new(LearningSessionService::new(session_repository));

        Self {
            pipeline_service,
            session_service,
            config: Arc::new(config),
        }
    }
}
