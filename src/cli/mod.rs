use crate::config::Config;
use crate::core::{CreateOptions, MediaType, VideoInfo};
use crate::plugins::default_parser;
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "video-url-parser")]
#[command(about = "Identify video providers from URLs and rebuild canonical links")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a URL and print the video info as JSON
    Parse {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Rebuild a URL from video information
    Create {
        /// Provider name (canonical or alias)
        provider: String,

        /// Video id
        #[arg(short, long)]
        id: Option<String>,

        /// Playlist id
        #[arg(short, long)]
        list: Option<String>,

        /// Start offset in seconds
        #[arg(short, long)]
        start: Option<u64>,

        /// URL form to produce (short, long, embed, ...)
        #[arg(short, long)]
        format: Option<String>,
    },
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;
        let parser = default_parser();

        match &self.command {
            Command::Parse { url } => {
                let Some(info) = parser.parse(url) else {
                    bail!("no registered provider matched: {}", url);
                };
                let json = if config.pretty_json {
                    serde_json::to_string_pretty(&info)?
                } else {
                    serde_json::to_string(&info)?
                };
                println!("{}", json);
            }
            Command::Create {
                provider,
                id,
                list,
                start,
                format,
            } => {
                let media_type = if id.is_none() && list.is_some() {
                    MediaType::Playlist
                } else {
                    MediaType::Video
                };
                let mut info = VideoInfo::new(media_type);
                info.provider = provider.clone();
                info.id = id.clone();
                info.list = list.clone();
                info.start = *start;

                let format = format.clone().unwrap_or(config.create_format);
                let options = CreateOptions::new(info).with_format(format);
                match parser.create(&options)? {
                    Some(url) => println!("{}", url),
                    None => bail!("provider '{}' cannot create this URL form", provider),
                }
            }
        }

        Ok(())
    }
}
