use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{youtube_video::VIDEO_ID_LENGTH, YouTubeVideo};

static YOUTUBE_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.)?(?:youtube\.com/(?:embed/|v/|watch\?v=|watch\?.+&v=)|youtu\.be/)([^&#?]+)(?:[\?&]t=(\d+))?",
    )
    .expect("YOUTUBE_URL_REGEX is a valid regex pattern")
});

/// Video id and optional start offset of a standard or short YouTube link.
pub fn parse_youtube_url(url: &str) -> Option<YouTubeVideo> {
    let captures = YOUTUBE_URL_REGEX.captures(url.trim())?;
    let video_id = captures.get(1)?.as_str();

    if video_id.chars().count() != VIDEO_ID_LENGTH {
        return None;
    }

    Some(YouTubeVideo {
        video_id: video_id.to_string(),
        start_seconds: captures.get(2).and_then(|t| t.as_str().parse().ok()),
    })
}

pub fn is_valid_youtube_url(url: &str) -> bool {
    parse_youtube_url(url).is_some()
}
