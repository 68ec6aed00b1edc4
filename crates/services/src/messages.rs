//! # Message workflows
//!
//! Coordinates validate-then-submit: check the draft, submit it, and on
//! success re-fetch the message list into the catalog, exactly once per
//! successful mutation.

use std::sync::Arc;

use domains::{CmsGateway, Message, MessageDraft, MessageQuery, Result};

use crate::catalog::Catalog;
use crate::validator::DraftValidator;

pub struct MessageService {
    gateway: Arc<dyn CmsGateway>,
    validator: DraftValidator,
    catalog: Arc<Catalog>,
}

impl MessageService {
    pub fn new(
        gateway: Arc<dyn CmsGateway>,
        validator: DraftValidator,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            gateway,
            validator,
            catalog,
        }
    }

    /// Fetches the full message list and replaces the cached copy.
    pub async fn refresh(&self) -> Result<Vec<Message>> {
        let messages = self.gateway.list_messages(&MessageQuery::default()).await?;
        tracing::info!(count = messages.len(), "messages fetched");
        self.catalog.set_messages(messages.clone()).await;
        Ok(messages)
    }

    /// Server-side filtered listing. Leaves the cache alone.
    pub async fn search(&self, query: &MessageQuery) -> Result<Vec<Message>> {
        self.gateway.list_messages(query).await
    }

    /// Validates and submits a new message. One refresh on success; a
    /// rejection or gateway error aborts with the store untouched.
    pub async fn create(&self, draft: MessageDraft) -> Result<()> {
        self.validator.validate(&draft).await?;
        self.gateway.create_message(&draft).await?;
        tracing::info!(title = %draft.title, "message created");
        self.refresh().await?;
        Ok(())
    }

    /// Validates and submits an edit of an existing message.
    pub async fn update(&self, id: i64, draft: MessageDraft) -> Result<()> {
        self.validator.validate(&draft).await?;
        self.gateway.update_message(id, &draft).await?;
        tracing::info!(id, "message updated");
        self.refresh().await?;
        Ok(())
    }

    /// Associates every listed message with every listed tag, then
    /// refreshes the message list (its tag collections changed).
    pub async fn assign_tags(&self, message_ids: &[i64], tag_ids: &[i64]) -> Result<()> {
        self.gateway.assign_tags(message_ids, tag_ids).await?;
        tracing::info!(
            messages = message_ids.len(),
            tags = tag_ids.len(),
            "tags assigned"
        );
        self.refresh().await?;
        Ok(())
    }
}
