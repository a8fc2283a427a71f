use crate::core::{MediaType, Plugin, UrlParser, VideoInfo};
use crate::utils::{parse_time_offset, query_param};
use once_cell::sync::Lazy;
use regex::Regex;

static SHORT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"youtu\.be/([\w-]+)").unwrap());
static EMBED_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/embed/([\w-]+)").unwrap());
static LIVE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/live/([\w-]+)").unwrap());

/// Handles youtube.com watch/embed/playlist URLs and youtu.be short links.
pub struct YoutubePlugin;

impl YoutubePlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for YoutubePlugin {
    fn provider(&self) -> &str {
        "youtube"
    }

    fn alternatives(&self) -> &[&str] {
        &["youtu"]
    }

    fn parse(&self, _parser: &UrlParser, url: &str) -> Option<VideoInfo> {
        let start = query_param(url, "t")
            .or_else(|| query_param(url, "start"))
            .and_then(|v| parse_time_offset(&v));

        // youtube.com/live/{id} is a live broadcast, not a plain video.
        if let Some(caps) = LIVE_ID.captures(url) {
            let mut info = VideoInfo::new(MediaType::Stream);
            info.id = Some(caps[1].to_string());
            info.start = start;
            return Some(info);
        }

        let id = query_param(url, "v")
            .or_else(|| SHORT_ID.captures(url).map(|c| c[1].to_string()))
            .or_else(|| EMBED_ID.captures(url).map(|c| c[1].to_string()));
        let list = query_param(url, "list");

        let mut info = match (&id, &list) {
            (Some(_), _) => VideoInfo::new(MediaType::Video),
            (None, Some(_)) => VideoInfo::new(MediaType::Playlist),
            (None, None) => return None,
        };
        info.id = id;
        info.list = list;
        info.start = start;
        Some(info)
    }

    fn create(&self, _parser: &UrlParser, info: &VideoInfo, format: &str) -> Option<String> {
        match format {
            "short" => {
                let id = info.id.as_deref()?;
                let mut url = format!("https://youtu.be/{}", id);
                if let Some(start) = info.start {
                    url.push_str(&format!("?t={}", start));
                }
                Some(url)
            }
            "embed" => {
                let id = info.id.as_deref()?;
                let mut url = format!("https://www.youtube.com/embed/{}", id);
                if let Some(start) = info.start {
                    url.push_str(&format!("?start={}", start));
                }
                Some(url)
            }
            "long" => {
                if let Some(id) = info.id.as_deref() {
                    let mut url = format!("https://www.youtube.com/watch?v={}", id);
                    if let Some(list) = info.list.as_deref() {
                        url.push_str(&format!("&list={}", list));
                    }
                    if let Some(start) = info.start {
                        url.push_str(&format!("&t={}", start));
                    }
                    Some(url)
                } else {
                    // Start offsets apply to a single video; the playlist
                    // form has no position to seek, so `start` is dropped.
                    info.list
                        .as_deref()
                        .map(|list| format!("https://www.youtube.com/playlist?list={}", list))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(url: &str) -> Option<VideoInfo> {
        YoutubePlugin::new().parse(&UrlParser::new(), url)
    }

    #[test]
    fn test_parse_watch_url() {
        let info = parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(info.id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(info.media_type, MediaType::Video);
    }

    #[test]
    fn test_parse_short_url_with_start() {
        let info = parse("https://youtu.be/dQw4w9WgXcQ?t=1m30s").unwrap();
        assert_eq!(info.id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(info.start, Some(90));
    }

    #[test]
    fn test_parse_embed_url() {
        let info = parse("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap();
        assert_eq!(info.id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_parse_playlist_url() {
        let info = parse("https://www.youtube.com/playlist?list=PL123abc").unwrap();
        assert_eq!(info.media_type, MediaType::Playlist);
        assert_eq!(info.list.as_deref(), Some("PL123abc"));
        assert_eq!(info.id, None);
    }

    #[test]
    fn test_parse_live_url() {
        let info = parse("https://www.youtube.com/live/jfKfPfyJRdk").unwrap();
        assert_eq!(info.media_type, MediaType::Stream);
        assert_eq!(info.id.as_deref(), Some("jfKfPfyJRdk"));
    }

    #[test]
    fn test_parse_oversized_start_time_is_dropped() {
        let info = parse("https://youtu.be/dQw4w9WgXcQ?t=9999999999999999999h").unwrap();
        assert_eq!(info.id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(info.start, None);
    }

    #[test]
    fn test_parse_bare_path_is_none() {
        assert!(parse("https://www.youtube.com/feed/subscriptions").is_none());
    }

    #[test]
    fn test_create_formats() {
        let plugin = YoutubePlugin::new();
        let parser = UrlParser::new();
        let mut info = VideoInfo::new(MediaType::Video);
        info.id = Some("dQw4w9WgXcQ".to_string());
        info.start = Some(90);

        assert_eq!(
            plugin.create(&parser, &info, "short").as_deref(),
            Some("https://youtu.be/dQw4w9WgXcQ?t=90")
        );
        assert_eq!(
            plugin.create(&parser, &info, "long").as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=90")
        );
        assert_eq!(
            plugin.create(&parser, &info, "embed").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ?start=90")
        );
        assert_eq!(plugin.create(&parser, &info, "gif"), None);
    }

    #[test]
    fn test_create_playlist_form_drops_start() {
        let plugin = YoutubePlugin::new();
        let parser = UrlParser::new();
        let mut info = VideoInfo::new(MediaType::Playlist);
        info.list = Some("PL123abc".to_string());
        info.start = Some(90);

        assert_eq!(
            plugin.create(&parser, &info, "long").as_deref(),
            Some("https://www.youtube.com/playlist?list=PL123abc")
        );
    }
}
