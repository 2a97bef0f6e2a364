pub mod markdown;
pub mod page;
pub mod quiz_view;

pub use markdown::markdown_to_html;
pub use page::render_results_page;
pub use quiz_view::{quiz_visible_text, render_quiz_html};
