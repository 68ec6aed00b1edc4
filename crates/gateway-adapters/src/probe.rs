//! # HTTP media probe
//!
//! Remote inspection of thumbnail and video URLs before submission. The
//! image probe downloads the body because the size limit is checked against
//! the actual byte count; the video probe stops at the response headers.

use std::time::Duration;

use async_trait::async_trait;
use domains::{AppError, MediaProbe, RemoteMedia, Result};
use mime::Mime;
use reqwest::header::{self, HeaderMap};
use url::Url;

pub struct HttpMediaProbe {
    client: reqwest::Client,
}

impl HttpMediaProbe {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Internal(err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl MediaProbe for HttpMediaProbe {
    async fn probe_image(&self, url: &Url) -> Result<RemoteMedia> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| AppError::Unreachable(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Unreachable(format!("GET {url} returned {status}")));
        }

        let content_type = content_type(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|err| AppError::Unreachable(err.to_string()))?;
        tracing::debug!(%url, size = body.len(), "image probed");

        Ok(RemoteMedia {
            content_type,
            size: Some(body.len() as u64),
        })
    }

    async fn probe_video(&self, url: &Url) -> Result<RemoteMedia> {
        let response = self
            .client
            .head(url.clone())
            .send()
            .await
            .map_err(|err| AppError::Unreachable(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Unreachable(format!(
                "HEAD {url} returned {status}"
            )));
        }

        let size = response
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok());

        Ok(RemoteMedia {
            content_type: content_type(response.headers()),
            size,
        })
    }
}

fn content_type(headers: &HeaderMap) -> Option<Mime> {
    headers
        .get(header::CONTENT_TYPE)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn image_probe_reports_content_type_and_exact_size() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/cover.png")
            .with_header("content-type", "image/png")
            .with_body(vec![0u8; 2048])
            .create_async()
            .await;

        let probe = HttpMediaProbe::new(Duration::from_secs(5)).unwrap();
        let url = Url::parse(&format!("{}/cover.png", server.url())).unwrap();
        let media = probe.probe_image(&url).await.unwrap();
        assert_eq!(media.content_type.unwrap().essence_str(), "image/png");
        assert_eq!(media.size, Some(2048));
    }

    #[tokio::test]
    async fn video_probe_uses_head_and_reads_headers_only() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("HEAD", "/clip.mp4")
            .with_header("content-type", "video/mp4")
            .with_header("content-length", "1000000")
            .create_async()
            .await;

        let probe = HttpMediaProbe::new(Duration::from_secs(5)).unwrap();
        let url = Url::parse(&format!("{}/clip.mp4", server.url())).unwrap();
        let media = probe.probe_video(&url).await.unwrap();
        assert_eq!(media.content_type.unwrap().essence_str(), "video/mp4");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_unreachable() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/gone.png")
            .with_status(404)
            .create_async()
            .await;

        let probe = HttpMediaProbe::new(Duration::from_secs(5)).unwrap();
        let url = Url::parse(&format!("{}/gone.png", server.url())).unwrap();
        assert!(matches!(
            probe.probe_image(&url).await,
            Err(AppError::Unreachable(_))
        ));
    }
}
