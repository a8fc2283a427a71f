use crate::core::{MediaType, Plugin, UrlParser, VideoInfo};
use crate::utils::{parse_time_offset, query_param};
use once_cell::sync::Lazy;
use regex::Regex;

// Long-form ids carry a `_readable-title` suffix which is not part of the id.
static VIDEO_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:/video/|dai\.ly/)([a-zA-Z0-9]+)").unwrap());

/// Handles dailymotion.com video URLs and dai.ly short links.
pub struct DailymotionPlugin;

impl DailymotionPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for DailymotionPlugin {
    fn provider(&self) -> &str {
        "dailymotion"
    }

    fn alternatives(&self) -> &[&str] {
        &["dai"]
    }

    fn parse(&self, _parser: &UrlParser, url: &str) -> Option<VideoInfo> {
        let id = VIDEO_ID.captures(url)?[1].to_string();
        let mut info = VideoInfo::new(MediaType::Video);
        info.id = Some(id);
        info.start = query_param(url, "start").and_then(|v| parse_time_offset(&v));
        Some(info)
    }

    fn create(&self, _parser: &UrlParser, info: &VideoInfo, format: &str) -> Option<String> {
        let id = info.id.as_deref()?;
        match format {
            "short" => Some(format!("https://dai.ly/{}", id)),
            "long" => {
                let mut url = format!("https://www.dailymotion.com/video/{}", id);
                if let Some(start) = info.start {
                    url.push_str(&format!("?start={}", start));
                }
                Some(url)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(url: &str) -> Option<VideoInfo> {
        DailymotionPlugin::new().parse(&UrlParser::new(), url)
    }

    #[test]
    fn test_parse_long_url() {
        let info = parse("https://www.dailymotion.com/video/x2no31b_some-title_music").unwrap();
        assert_eq!(info.id.as_deref(), Some("x2no31b"));
    }

    #[test]
    fn test_parse_short_url_with_start() {
        let info = parse("https://dai.ly/x2no31b?start=45").unwrap();
        assert_eq!(info.id.as_deref(), Some("x2no31b"));
        assert_eq!(info.start, Some(45));
    }

    #[test]
    fn test_parse_without_id_is_none() {
        assert!(parse("https://www.dailymotion.com/browse").is_none());
    }

    #[test]
    fn test_create_formats() {
        let plugin = DailymotionPlugin::new();
        let parser = UrlParser::new();
        let mut info = VideoInfo::new(MediaType::Video);
        info.id = Some("x2no31b".to_string());

        assert_eq!(
            plugin.create(&parser, &info, "short").as_deref(),
            Some("https://dai.ly/x2no31b")
        );
        assert_eq!(
            plugin.create(&parser, &info, "long").as_deref(),
            Some("https://www.dailymotion.com/video/x2no31b")
        );
    }
}
