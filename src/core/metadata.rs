use serde::{Deserialize, Serialize};

/// What kind of resource a URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Video,
    Playlist,
    Stream,
}

/// Structured result of parsing a URL, and the input for rebuilding one.
///
/// `provider` is always the canonical provider name: the dispatcher stamps it
/// after a plugin returns, so callers see `"youtube"` even when the URL
/// matched via the `"youtu"` alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VideoInfo {
    pub provider: String,
    pub media_type: MediaType,
    pub id: Option<String>,
    pub list: Option<String>,
    /// Start offset in seconds, when the URL carried one.
    pub start: Option<u64>,
}

impl VideoInfo {
    pub fn new(media_type: MediaType) -> Self {
        Self {
            media_type,
            ..Self::default()
        }
    }
}

/// Options for [`UrlParser::create`](crate::core::UrlParser::create).
///
/// `format` names a plugin-defined URL form ("short", "long", "embed", ...);
/// when absent the dispatcher defaults it to `"short"`.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub video_info: VideoInfo,
    pub format: Option<String>,
}

impl CreateOptions {
    pub fn new(video_info: VideoInfo) -> Self {
        Self {
            video_info,
            format: None,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}
