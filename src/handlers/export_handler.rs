use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::response::ClipboardDto,
    services::{
        export_service::{ClipboardRegion, ExportService, COPY_SUCCESS_MESSAGE},
        http_helpers::attachment,
    },
};

#[get("/api/sessions/{id}/downloads/summary")]
pub async fn download_summary(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.get_session(&id).await?;
    Ok(attachment(ExportService::summary_file(&session)))
}

#[get("/api/sessions/{id}/downloads/quiz")]
pub async fn download_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.get_session(&id).await?;
    Ok(attachment(ExportService::quiz_file(&session)))
}

#[get("/api/sessions/{id}/clipboard/{region}")]
pub async fn copy_region(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (id, region) = path.into_inner();
    let region: ClipboardRegion = region.parse()?;

    let session = state.session_service.get_session(&id).await?;
    let text = ExportService::clipboard_text(&session, region).map_err(|e| {
        log::warn!("Failed to copy {}: {}", region.element_id(), e);
        e
    })?;

    Ok(HttpResponse::Ok().json(ClipboardDto {
        region: region.element_id().to_string(),
        text,
        message: COPY_SUCCESS_MESSAGE.to_string(),
    }))
}
