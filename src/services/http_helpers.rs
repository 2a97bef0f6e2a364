use actix_web::{
    http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType},
    HttpResponse,
};

use crate::services::export_service::ExportFile;

/// Creates a download response carrying the file name
pub fn attachment(file: ExportFile) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(file.content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file.filename.to_string())],
        })
        .body(file.body)
}

/// Creates an HTML page response
pub fn html_page(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}
