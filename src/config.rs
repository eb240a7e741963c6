use std::{env, fmt, path::PathBuf};

use thiserror::Error;

pub const DEFAULT_DOWNLOAD_CONCURRENCY: usize = 8;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("You must set environment variable \"{0}\"")]
    Missing(&'static str),

    #[error("Environment variable \"{name}\" has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Process wide settings, read once at startup and shared as `Arc<Config>`.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    /// Upper bound on parallel file lookups and downloads for one sticker set
    pub download_concurrency: usize,
    /// Ship the platform file ids in `metainfo.json`
    pub include_file_ids: bool,
    /// Parent directory of the per request staging directories
    pub staging_root: PathBuf,
}

impl Config {
    pub fn new(bot_token: impl Into<String>, staging_root: impl Into<PathBuf>) -> Self {
        Self {
            bot_token: bot_token.into(),
            download_concurrency: DEFAULT_DOWNLOAD_CONCURRENCY,
            include_file_ids: false,
            staging_root: staging_root.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = env::var("BOT_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::Missing("BOT_TOKEN"))?;

        let download_concurrency = match env::var("DOWNLOAD_CONCURRENCY") {
            Ok(value) => match value.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DOWNLOAD_CONCURRENCY",
                        value,
                    })
                }
            },
            Err(_) => DEFAULT_DOWNLOAD_CONCURRENCY,
        };

        let include_file_ids = match env::var("INCLUDE_FILE_IDS") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "INCLUDE_FILE_IDS",
                value: value.clone(),
            })?,
            Err(_) => false,
        };

        let staging_root = env::var_os("STAGING_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);

        Ok(Self {
            download_concurrency,
            include_file_ids,
            ..Self::new(bot_token, staging_root)
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("download_concurrency", &self.download_concurrency)
            .field("include_file_ids", &self.include_file_ids)
            .field("staging_root", &self.staging_root)
            .finish()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
