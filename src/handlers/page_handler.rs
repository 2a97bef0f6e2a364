use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, rendering::render_results_page,
    services::http_helpers::html_page,
};

#[get("/")]
pub async fn index() -> HttpResponse {
    html_page(render_results_page(None))
}

#[get("/sessions/{id}")]
pub async fn session_page(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.get_session(&id).await?;
    Ok(html_page(render_results_page(Some(&session))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_index_renders_empty_page() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let page = String::from_utf8(body.to_vec()).expect("page should be utf-8");

        assert!(page.contains("id=\"quiz-container\""));
        assert!(page.contains("id=\"loader\""));
    }
}
