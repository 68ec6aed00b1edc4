//! # Configuration
//!
//! Layered settings for the Watermark client: built-in defaults, then an
//! optional `watermark.toml`, then `WATERMARK__`-prefixed environment
//! variables (`__` separates sections, `,` separates list items). A `.env`
//! file is honored before the environment is read.

use config::{Config, ConfigBuilder, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Where the backend lives and how long we wait for it.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    /// Base URL of the CMS REST backend, e.g. `http://localhost:8000`
    pub base_url: Url,
    pub timeout_secs: u64,
}

/// Allow-lists and limits applied to remote media before submission.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaSettings {
    pub allowed_image_formats: Vec<String>,
    pub allowed_video_formats: Vec<String>,
    pub max_image_size_mb: u64,
    /// When false, media checks stop at URL syntax (no network probes)
    pub probe: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub backend: BackendSettings,
    pub media: MediaSettings,
}

impl Settings {
    /// Loads settings from all layers. Fails when `backend.base_url` is
    /// missing or any value cannot be parsed.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let settings: Settings = builder()?
            .add_source(File::with_name("watermark").required(false))
            .add_source(
                Environment::with_prefix("WATERMARK")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("media.allowed_image_formats")
                    .with_list_parse_key("media.allowed_video_formats"),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!(
            backend = %settings.backend.base_url,
            image_formats = ?settings.media.allowed_image_formats,
            video_formats = ?settings.media.allowed_video_formats,
            max_image_size_mb = settings.media.max_image_size_mb,
            "settings loaded"
        );
        Ok(settings)
    }

    pub fn max_image_size_bytes(&self) -> u64 {
        self.media.max_image_size_mb * 1024 * 1024
    }
}

fn builder() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    Ok(Config::builder()
        .set_default("backend.timeout_secs", 30)?
        .set_default("media.allowed_image_formats", vec!["image/png", "image/jpeg"])?
        .set_default("media.allowed_video_formats", vec!["video/mp4", "video/webm"])?
        .set_default("media.max_image_size_mb", 5)?
        .set_default("media.probe", true)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_everything_but_the_base_url() {
        let settings: Settings = builder()
            .unwrap()
            .set_override("backend.base_url", "http://localhost:8000")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.backend.timeout_secs, 30);
        assert_eq!(
            settings.media.allowed_image_formats,
            vec!["image/png", "image/jpeg"]
        );
        assert_eq!(settings.media.max_image_size_mb, 5);
        assert!(settings.media.probe);
        assert_eq!(settings.max_image_size_bytes(), 5 * 1024 * 1024);
    }

    #[test]
    fn missing_base_url_is_an_error() {
        let result = builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>();
        assert!(result.is_err());
    }
}
