//! # Core Traits (Ports)
//!
//! Any adapter must implement these traits to be used by the binary.

use async_trait::async_trait;
use url::Url;

use crate::error::Result;
use crate::models::{Message, MessageDraft, MessageQuery, RemoteMedia, Tag, TagQuery};

/// The REST backend contract: every network operation the client performs
/// against the CMS, one method per endpoint.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CmsGateway: Send + Sync {
    /// `GET /messages`, optionally server-filtered.
    async fn list_messages(&self, query: &MessageQuery) -> Result<Vec<Message>>;

    /// `GET /tags`, optionally server-filtered.
    async fn list_tags(&self, query: &TagQuery) -> Result<Vec<Tag>>;

    /// `POST /messages`. The backend assigns the id and owns uniqueness of titles.
    async fn create_message(&self, draft: &MessageDraft) -> Result<()>;

    /// `PUT /messages?id=<id>`.
    async fn update_message(&self, id: i64, draft: &MessageDraft) -> Result<()>;

    /// `POST /tags` with the names that should exist afterwards.
    async fn add_tags(&self, names: &[String]) -> Result<()>;

    /// `POST /message_tags`: associate every listed message with every listed tag.
    async fn assign_tags(&self, message_ids: &[i64], tag_ids: &[i64]) -> Result<()>;
}

/// Remote media inspection used by validation before a draft is submitted.
///
/// Implementations return `Err` both for transport failures and non-success
/// statuses; the validator turns either into a field rejection.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait MediaProbe: Send + Sync {
    /// GET the image so its exact body size is known.
    async fn probe_image(&self, url: &Url) -> Result<RemoteMedia>;

    /// HEAD the video; only headers are inspected.
    async fn probe_video(&self, url: &Url) -> Result<RemoteMedia>;
}
