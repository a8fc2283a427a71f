use crate::core::{CreateOptions, Plugin, VideoInfo};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Pulls the candidate provider token out of a URL: skip an optional scheme,
/// skip at most one subdomain label, capture the word run before the next
/// dot. `https://www.youtube.com/...` -> `youtube`, `youtu.be/x` -> `youtu`.
static PROVIDER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://)?(?:[^.]+\.)?(\w+)\.").unwrap());

#[derive(Debug, Error)]
pub enum CreateError {
    #[error("no plugin registered for provider '{0}'")]
    UnknownProvider(String),
}

/// Provider registry and dispatcher.
///
/// Construct once, register every plugin, then treat as read-mostly. The
/// registry is plain in-process state; embedders running it across threads
/// must serialize registration against reads themselves.
#[derive(Default)]
pub struct UrlParser {
    plugins: HashMap<String, Arc<dyn Plugin>>,
}

impl UrlParser {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Register a plugin under its canonical name and every alternative.
    ///
    /// All keys share one plugin instance. Registering over an existing key
    /// silently replaces it: last registration wins.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) {
        debug!(
            provider = plugin.provider(),
            alternatives = ?plugin.alternatives(),
            "registering plugin"
        );
        self.plugins
            .insert(plugin.provider().to_string(), Arc::clone(&plugin));
        for alias in plugin.alternatives() {
            self.plugins.insert((*alias).to_string(), Arc::clone(&plugin));
        }
    }

    /// Look up a plugin by exact identifier (canonical name or alias).
    pub fn lookup(&self, identifier: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.get(identifier).cloned()
    }

    /// Extract the candidate provider identifier from a free-form URL.
    ///
    /// Best-effort heuristic: it assumes the provider token is the domain's
    /// second-level label. Deeper nesting is resolved by the same rule, so
    /// `video.example.co.uk` yields `example` rather than anything smarter.
    pub fn extract_provider_token<'a>(&self, url: &'a str) -> Option<&'a str> {
        PROVIDER_TOKEN
            .captures(url)
            .map(|caps| caps.get(1).unwrap().as_str())
    }

    /// Parse a URL by dispatching to the matching plugin.
    ///
    /// Returns `None` for every non-match: unextractable URLs, unregistered
    /// providers, and plugins that recognized the domain but found no data.
    pub fn parse(&self, url: &str) -> Option<VideoInfo> {
        let token = self.extract_provider_token(url)?;
        let plugin = match self.lookup(token) {
            Some(plugin) => plugin,
            None => {
                debug!(token, "no plugin registered for token");
                return None;
            }
        };
        let mut info = plugin.parse(self, url)?;
        // Canonical name, even when the match came in via an alias.
        info.provider = plugin.provider().to_string();
        Some(info)
    }

    /// Rebuild a URL from parsed video information.
    ///
    /// `options.format` defaults to `"short"`. An unregistered provider is a
    /// caller error; a registered plugin without create capability is a
    /// normal `Ok(None)`.
    pub fn create(&self, options: &CreateOptions) -> Result<Option<String>, CreateError> {
        let info = &options.video_info;
        let format = options.format.as_deref().unwrap_or("short");
        let plugin = self
            .lookup(&info.provider)
            .ok_or_else(|| CreateError::UnknownProvider(info.provider.clone()))?;
        debug!(provider = %info.provider, format, "creating url");
        Ok(plugin.create(self, info, format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(url: &str) -> Option<&str> {
        UrlParser::new().extract_provider_token(url)
    }

    #[test]
    fn test_token_extraction() {
        assert_eq!(token("https://www.youtube.com/watch?v=abc"), Some("youtube"));
        assert_eq!(token("http://vimeo.com/123"), Some("vimeo"));
        assert_eq!(token("youtu.be/abc"), Some("youtu"));
        assert_eq!(token("HTTPS://WWW.YOUTUBE.COM/watch"), Some("YOUTUBE"));
        assert_eq!(token("dai.ly/x2no31b"), Some("dai"));
    }

    #[test]
    fn test_token_extraction_misses() {
        assert_eq!(token("not a url"), None);
        assert_eq!(token(""), None);
    }

    #[test]
    fn test_multi_level_domains_stay_heuristic() {
        // Known limitation: only one subdomain label is skipped.
        assert_eq!(token("https://video.example.co.uk/v/1"), Some("example"));
    }
}
