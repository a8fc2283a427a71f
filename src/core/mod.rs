pub mod metadata;
pub mod parser;
pub mod plugin;

pub use metadata::{CreateOptions, MediaType, VideoInfo};
pub use parser::{CreateError, UrlParser};
pub use plugin::Plugin;
