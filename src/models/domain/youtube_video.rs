use serde::{Deserialize, Serialize};

/// Length of every YouTube video identifier.
pub const VIDEO_ID_LENGTH: usize = 11;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct YouTubeVideo {
    pub video_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_seconds: Option<u64>,
}

impl YouTubeVideo {
    pub fn watch_url(&self) -> String {
        match self.start_seconds {
            Some(t) => format!("https://www.youtube.com/watch?v={}&t={}", self.video_id, t),
            None => format!("https://www.youtube.com/watch?v={}", self.video_id),
        }
    }
}
