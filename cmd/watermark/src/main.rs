//! # Watermark CLI
//!
//! The entry point that assembles the client: configuration, the HTTP
//! adapters, and the services the subcommands drive.

mod cli;
mod output;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use configs::Settings;
use domains::{CmsGateway, MediaProbe};
use gateway_adapters::{HttpMediaProbe, RestCmsGateway};
use services::{Catalog, DraftValidator, MediaRules, MessageService, TagService};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = cli::Cli::parse();
    let settings = Settings::load()?;
    let timeout = Duration::from_secs(settings.backend.timeout_secs);

    let gateway: Arc<dyn CmsGateway> =
        Arc::new(RestCmsGateway::new(settings.backend.base_url.clone(), timeout)?);
    let probe: Arc<dyn MediaProbe> = Arc::new(HttpMediaProbe::new(timeout)?);

    let rules = MediaRules {
        allowed_image_formats: settings.media.allowed_image_formats.clone(),
        allowed_video_formats: settings.media.allowed_video_formats.clone(),
        max_image_size_mb: settings.media.max_image_size_mb,
        probe: settings.media.probe,
    };

    let catalog = Arc::new(Catalog::new());
    let messages = MessageService::new(
        Arc::clone(&gateway),
        DraftValidator::new(rules, probe),
        Arc::clone(&catalog),
    );
    let tags = TagService::new(gateway, Arc::clone(&catalog));

    cli::run(args, &messages, &tags, &catalog).await
}
