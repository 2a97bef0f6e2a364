pub mod completion_service;
pub mod content_pipeline_service;
pub mod export_service;
pub mod http_helpers;
pub mod learning_session_service;
pub mod quiz_attempt_service;
pub mod quiz_parser;
pub mod youtube_service;
