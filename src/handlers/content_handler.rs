use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{ProcessContentRequest, YouTubeUrlRequest},
        response::{LearningSessionDto, ProcessContentResponse, YouTubeValidationDto},
    },
    services::youtube_service::{is_valid_youtube_url, parse_youtube_url},
};

#[post("/api/content/process")]
pub async fn process_content(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<ProcessContentRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    if request.is_youtube() && !is_valid_youtube_url(&request.source) {
        return Err(AppError::ValidationError(format!(
            "'{}' is not a valid YouTube URL",
            request.source
        )));
    }

    log::info!(
        "Processing {} content from {} [request {}]",
        request.content_type,
        request.source,
        get_request_id(&req).unwrap_or_default()
    );

    let processed = state
        .pipeline_service
        .process_content(&request.content, &request.content_type, &request.source)
        .await?;

    let session = state
        .session_service
        .create_session(request.session_id.as_deref(), processed)
        .await?;

    Ok(HttpResponse::Created().json(ProcessContentResponse {
        data: LearningSessionDto::from(&session),
        message: "Summary and quiz generated".to_string(),
    }))
}

#[post("/api/youtube/validate")]
pub async fn validate_youtube_url(
    request: web::Json<YouTubeUrlRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let video = parse_youtube_url(&request.url);
    Ok(HttpResponse::Ok().json(YouTubeValidationDto::from(video)))
}
