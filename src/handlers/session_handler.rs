use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::SelectOptionRequest,
        response::{LearningSessionDto, ScoreDto},
    },
};

#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.get_session(&id).await?;
    Ok(HttpResponse::Ok().json(LearningSessionDto::from(&session)))
}

#[post("/api/sessions/{id}/selections")]
pub async fn select_option(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SelectOptionRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .select_option(&id, request.question_index, request.option_index)
        .await?;
    Ok(HttpResponse::Ok().json(LearningSessionDto::from(&session)))
}

#[post("/api/sessions/{id}/check")]
pub async fn check_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let attempt = state.session_service.check_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(ScoreDto::from(&attempt)))
}

#[post("/api/sessions/{id}/reset")]
pub async fn reset_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.reset_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(LearningSessionDto::from(&session)))
}
