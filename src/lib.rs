pub mod cli;
pub mod config;
pub mod core;
pub mod plugins;
pub mod utils;

pub use crate::core::{CreateError, CreateOptions, MediaType, Plugin, UrlParser, VideoInfo};
pub use crate::plugins::{default_parser, DailymotionPlugin, VimeoPlugin, YoutubePlugin};
