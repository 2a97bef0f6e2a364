pub mod content_handler;
pub mod export_handler;
pub mod health_handler;
pub mod page_handler;
pub mod session_handler;

use actix_web::web;

pub use content_handler::{process_content, validate_youtube_url};
pub use export_handler::{copy_region, download_quiz, download_summary};
pub use health_handler::{health_check, health_check_live};
pub use page_handler::{index, session_page};
pub use session_handler::{check_quiz, get_session, reset_quiz, select_option};

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_live)
        .service(index)
        .service(session_page)
        .service(process_content)
        .service(validate_youtube_url)
        .service(get_session)
        .service(select_option)
        .service(check_quiz)
        .service(reset_quiz)
        .service(download_summary)
        .service(download_quiz)
        .service(copy_region);
}
