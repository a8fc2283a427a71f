use crate::core::{MediaType, Plugin, UrlParser, VideoInfo};
use once_cell::sync::Lazy;
use regex::Regex;

static VIDEO_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/(\d+)(?:[?#/]|$)").unwrap());

/// Handles vimeo.com and vimeopro.com video URLs. Vimeo ids are purely
/// numeric, so the path segment is enough to go on.
pub struct VimeoPlugin;

impl VimeoPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for VimeoPlugin {
    fn provider(&self) -> &str {
        "vimeo"
    }

    fn alternatives(&self) -> &[&str] {
        &["vimeopro"]
    }

    fn parse(&self, _parser: &UrlParser, url: &str) -> Option<VideoInfo> {
        let id = VIDEO_ID.captures(url)?[1].to_string();
        let mut info = VideoInfo::new(MediaType::Video);
        info.id = Some(id);
        Some(info)
    }

    // Vimeo has a single canonical URL form; every format maps to it.
    fn create(&self, _parser: &UrlParser, info: &VideoInfo, _format: &str) -> Option<String> {
        info.id
            .as_deref()
            .map(|id| format!("https://vimeo.com/{}", id))
    }
}
