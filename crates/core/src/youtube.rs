use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SummarizeError};
use crate::timestamp::format_timestamp;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Descriptions shorter than this carry too little signal to summarize.
const MIN_CONTENT_CHARS: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    /// Colon-separated duration ("M:SS" or "H:MM:SS").
    pub duration: String,
    pub channel_name: String,
    pub view_count: String,
    pub published_at: String,
}

static VIDEO_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
            .unwrap(),
        Regex::new(r"youtube\.com/watch\?.*v=([^&\n?#]+)").unwrap(),
    ]
});

/// Pull the video id out of a watch, share, or embed URL.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Fetch video metadata from the YouTube Data API.
pub async fn fetch_video_info(video_id: &str, api_key: &str) -> Result<VideoInfo> {
    let url = format!(
        "{API_BASE}/videos?part=snippet,statistics,contentDetails&id={video_id}&key={api_key}"
    );
    fetch_video_info_from(&url, video_id).await
}

/// Fetch metadata and the description text used as summarization content.
///
/// The Data API does not expose transcripts, so the description stands in;
/// a sparse description means there is nothing to work with.
pub async fn fetch_video_content(video_id: &str, api_key: &str) -> Result<(VideoInfo, String)> {
    let info = fetch_video_info(video_id, api_key).await?;
    if info.description.trim().chars().count() < MIN_CONTENT_CHARS {
        return Err(SummarizeError::InsufficientContent);
    }
    let content = info.description.clone();
    Ok((info, content))
}

async fn fetch_video_info_from(url: &str, video_id: &str) -> Result<VideoInfo> {
    let response = reqwest::Client::new().get(url).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let reason = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|err| err["error"]["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| format!("request failed with status {status}"));
        return Err(SummarizeError::MetadataFailed { reason });
    }

    let data = response.json::<Value>().await?;
    let Some(video) = data["items"].get(0) else {
        return Err(SummarizeError::MetadataFailed {
            reason: "Video not found or is not publicly available".to_string(),
        });
    };

    let snippet = &video["snippet"];
    Ok(VideoInfo {
        id: video_id.to_string(),
        title: snippet["title"].as_str().unwrap_or_default().to_string(),
        description: snippet["description"].as_str().unwrap_or_default().to_string(),
        thumbnail: preferred_thumbnail(&snippet["thumbnails"], video_id),
        duration: parse_iso8601_duration(
            video["contentDetails"]["duration"].as_str().unwrap_or_default(),
        ),
        channel_name: snippet["channelTitle"].as_str().unwrap_or_default().to_string(),
        view_count: format_view_count(video["statistics"]["viewCount"].as_str().unwrap_or("0")),
        published_at: snippet["publishedAt"].as_str().unwrap_or_default().to_string(),
    })
}

fn preferred_thumbnail(thumbnails: &Value, video_id: &str) -> String {
    for key in ["maxres", "high", "medium"] {
        if let Some(url) = thumbnails[key]["url"].as_str() {
            return url.to_string();
        }
    }
    format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg")
}

static ISO_DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").unwrap());

/// Render an ISO-8601 video duration ("PT1H2M3S") as a colon timestamp.
/// Malformed input yields "0:00".
pub fn parse_iso8601_duration(duration: &str) -> String {
    let Some(caps) = ISO_DURATION.captures(duration) else {
        return "0:00".to_string();
    };
    let field = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .unwrap_or(0)
    };
    format_timestamp(field(1) * 3600 + field(2) * 60 + field(3))
}

/// Compact view-count rendering: "1.2M", "3.4K", or the raw number below a
/// thousand.
pub fn format_view_count(count: &str) -> String {
    let Ok(num) = count.parse::<u64>() else {
        return count.to_string();
    };
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
