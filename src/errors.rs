use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_openai::error::OpenAIError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("API Error: {0}")]
    ApiError(String),

    #[error("Failed to parse quiz data: {0}")]
    ParseError(String),

    #[error("Completion request failed: {0}")]
    NetworkError(String),

    #[error("Failed to process content: {0}")]
    ProcessingFailed(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ApiError(_) => "API_ERROR",
            AppError::ParseError(_) => "PARSE_ERROR",
            AppError::NetworkError(_) => "NETWORK_ERROR",
            AppError::ProcessingFailed(_) => "PROCESSING_FAILED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub error_code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ApiError(_)
            | AppError::ParseError(_)
            | AppError::NetworkError(_)
            | AppError::ProcessingFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            error_code: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<OpenAIError> for AppError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::ApiError(api_error) => AppError::ApiError(api_error.message),
            other => AppError::NetworkError(other.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
