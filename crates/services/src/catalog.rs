//! # Catalog
//!
//! The client's only shared state: a cached copy of the backend's message
//! and tag lists. The backend owns the data; these lists go stale the
//! moment someone else writes, and are replaced wholesale by the service
//! that performed the triggering request.

use domains::{Message, Tag};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct Catalog {
    messages: RwLock<Vec<Message>>,
    tags: RwLock<Vec<Tag>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the cached message list.
    pub async fn messages(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    /// Snapshot of the cached tag list.
    pub async fn tags(&self) -> Vec<Tag> {
        self.tags.read().await.clone()
    }

    pub async fn set_messages(&self, messages: Vec<Message>) {
        *self.messages.write().await = messages;
    }

    pub async fn set_tags(&self, tags: Vec<Tag>) {
        *self.tags.write().await = tags;
    }

    /// Exactly the subset of cached messages whose tag collection
    /// intersects the selection. An empty selection intersects nothing.
    pub async fn filter_by_tags(&self, selection: &[String]) -> Vec<Message> {
        self.messages
            .read()
            .await
            .iter()
            .filter(|message| message.tags.iter().any(|tag| selection.contains(tag)))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: i64, title: &str, tags: &[&str]) -> Message {
        Message {
            id,
            title: title.into(),
            description: String::new(),
            thumbnail: None,
            video: None,
            transcript: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn filter_returns_messages_intersecting_the_selection() {
        let catalog = Catalog::new();
        catalog
            .set_messages(vec![
                message(1, "a", &["rust", "news"]),
                message(2, "b", &["news"]),
                message(3, "c", &["video"]),
                message(4, "d", &[]),
            ])
            .await;

        let selection = vec!["rust".to_string(), "video".to_string()];
        let hits = catalog.filter_by_tags(&selection).await;
        assert_eq!(
            hits.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[tokio::test]
    async fn empty_selection_matches_nothing() {
        let catalog = Catalog::new();
        catalog.set_messages(vec![message(1, "a", &["rust"])]).await;
        assert!(catalog.filter_by_tags(&[]).await.is_empty());
    }

    #[tokio::test]
    async fn set_messages_replaces_the_snapshot() {
        let catalog = Catalog::new();
        catalog.set_messages(vec![message(1, "a", &[])]).await;
        catalog.set_messages(vec![message(2, "b", &[])]).await;
        let snapshot = catalog.messages().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, 2);
    }
}
