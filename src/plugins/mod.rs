pub mod dailymotion;
pub mod vimeo;
pub mod youtube;

pub use dailymotion::DailymotionPlugin;
pub use vimeo::VimeoPlugin;
pub use youtube::YoutubePlugin;

use crate::core::UrlParser;
use std::sync::Arc;

/// Build a parser with every bundled plugin registered.
pub fn default_parser() -> UrlParser {
    let mut parser = UrlParser::new();
    parser.register(Arc::new(YoutubePlugin::new()));
    parser.register(Arc::new(VimeoPlugin::new()));
    parser.register(Arc::new(DailymotionPlugin::new()));
    parser
}
