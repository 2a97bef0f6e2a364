use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProcessContentRequest {
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub content_type: String,

    #[validate(length(min = 1, max = 2048))]
    pub source: String,

    // Overwrites this session instead of creating a new one
    #[serde(default)]
    pub session_id: Option<String>,
}

impl ProcessContentRequest {
    pub fn is_youtube(&self) -> bool {
        self.content_type.trim().eq_ignore_ascii_case("youtube")
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SelectOptionRequest {
    pub question_index: usize,
    pub option_index: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct YouTubeUrlRequest {
    #[validate(length(min = 1, max = 2048))]
    pub url: String,
}
