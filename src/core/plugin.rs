use crate::core::{UrlParser, VideoInfo};

/// Contract a provider plugin has to satisfy to be registered with a
/// [`UrlParser`].
///
/// The dispatcher is passed back into `parse`/`create` so a plugin can
/// re-enter it, e.g. to resolve an embedded URL through another provider.
pub trait Plugin: Send + Sync {
    /// Canonical provider name the plugin is registered under.
    fn provider(&self) -> &str;

    /// Additional identifiers that should resolve to this plugin
    /// (e.g. `"youtu"` for youtu.be short links).
    fn alternatives(&self) -> &[&str] {
        &[]
    }

    /// Parse a URL known to belong to this provider's domain. Returning
    /// `None` means the domain matched but the URL carried no usable data.
    fn parse(&self, parser: &UrlParser, url: &str) -> Option<VideoInfo>;

    /// Rebuild a URL in the requested format. Parse-only plugins keep the
    /// default and return `None` for every request.
    fn create(&self, parser: &UrlParser, info: &VideoInfo, format: &str) -> Option<String> {
        let _ = (parser, info, format);
        None
    }
}
