//! # Draft Validation
//!
//! The gate every submission passes before it goes on the wire. Checks run
//! in a fixed order and the first failure wins; failures are never
//! aggregated.

use std::sync::Arc;

use domains::{DraftField, MediaProbe, MessageDraft, Rejection, RemoteMedia};
use url::Url;

/// Allow-lists and limits, resolved from configuration by the binary.
#[derive(Debug, Clone)]
pub struct MediaRules {
    pub allowed_image_formats: Vec<String>,
    pub allowed_video_formats: Vec<String>,
    pub max_image_size_mb: u64,
    /// When false, media checks stop at URL syntax (no network probes)
    pub probe: bool,
}

impl MediaRules {
    fn max_image_size_bytes(&self) -> u64 {
        self.max_image_size_mb * 1024 * 1024
    }
}

pub struct DraftValidator {
    rules: MediaRules,
    probe: Arc<dyn MediaProbe>,
}

impl DraftValidator {
    pub fn new(rules: MediaRules, probe: Arc<dyn MediaProbe>) -> Self {
        Self { rules, probe }
    }

    /// Validates a draft for create or edit submission.
    ///
    /// Title and description must be non-blank. A thumbnail, when present,
    /// must be a well-formed URL pointing at an allowed image format under
    /// the size limit; a video must be a well-formed URL pointing at an
    /// allowed video format. URL syntax is rejected before any probe runs.
    pub async fn validate(&self, draft: &MessageDraft) -> Result<(), Rejection> {
        if draft.title.trim().is_empty() {
            return Err(Rejection::new(DraftField::Title, "Title is required"));
        }
        if draft.description.trim().is_empty() {
            return Err(Rejection::new(
                DraftField::Description,
                "Description is required",
            ));
        }

        if let Some(thumbnail) = non_blank(draft.thumbnail.as_deref()) {
            let url = parse_media_url(thumbnail).ok_or_else(|| {
                Rejection::new(DraftField::Thumbnail, "Thumbnail must be a valid URL")
            })?;
            if self.rules.probe {
                self.check_thumbnail(&url).await?;
            }
        }

        if let Some(video) = non_blank(draft.video.as_deref()) {
            let url = parse_media_url(video)
                .ok_or_else(|| Rejection::new(DraftField::Video, "Video must be a valid URL"))?;
            if self.rules.probe {
                self.check_video(&url).await?;
            }
        }

        Ok(())
    }

    async fn check_thumbnail(&self, url: &Url) -> Result<(), Rejection> {
        let media = self.probe.probe_image(url).await.map_err(|err| {
            tracing::debug!(%url, %err, "thumbnail probe failed");
            Rejection::new(
                DraftField::Thumbnail,
                "Failed to fetch thumbnail image from URL",
            )
        })?;

        if !content_type_allowed(&media, &self.rules.allowed_image_formats) {
            return Err(Rejection::new(
                DraftField::Thumbnail,
                format!(
                    "Only {} formats are allowed.",
                    self.rules.allowed_image_formats.join(", ")
                ),
            ));
        }

        if media.size.unwrap_or(0) > self.rules.max_image_size_bytes() {
            return Err(Rejection::new(
                DraftField::Thumbnail,
                format!(
                    "Image size must be less than {} MB.",
                    self.rules.max_image_size_mb
                ),
            ));
        }

        Ok(())
    }

    async fn check_video(&self, url: &Url) -> Result<(), Rejection> {
        let media = self.probe.probe_video(url).await.map_err(|err| {
            tracing::debug!(%url, %err, "video probe failed");
            Rejection::new(DraftField::Video, "Failed to fetch video from URL")
        })?;

        if !content_type_allowed(&media, &self.rules.allowed_video_formats) {
            return Err(Rejection::new(
                DraftField::Video,
                format!(
                    "Only {} formats are allowed.",
                    self.rules.allowed_video_formats.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

fn content_type_allowed(media: &RemoteMedia, allowed: &[String]) -> bool {
    match &media.content_type {
        Some(content_type) => allowed
            .iter()
            .any(|format| format == content_type.essence_str()),
        None => false,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Absolute URL with an `http`, `https`, or `ftp` scheme. Anything else
/// never reaches a probe.
fn parse_media_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https" | "ftp").then_some(url)
}
