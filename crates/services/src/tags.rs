//! # Tag workflows

use std::sync::Arc;

use domains::{CmsGateway, Result, Tag, TagQuery};

use crate::catalog::Catalog;

pub struct TagService {
    gateway: Arc<dyn CmsGateway>,
    catalog: Arc<Catalog>,
}

impl TagService {
    pub fn new(gateway: Arc<dyn CmsGateway>, catalog: Arc<Catalog>) -> Self {
        Self { gateway, catalog }
    }

    /// Fetches the full tag list and replaces the cached copy.
    pub async fn refresh(&self) -> Result<Vec<Tag>> {
        let tags = self.gateway.list_tags(&TagQuery::default()).await?;
        tracing::info!(count = tags.len(), "tags fetched");
        self.catalog.set_tags(tags.clone()).await;
        Ok(tags)
    }

    /// Server-side filtered listing. Leaves the cache alone.
    pub async fn search(&self, query: &TagQuery) -> Result<Vec<Tag>> {
        self.gateway.list_tags(query).await
    }

    /// Submits new tag names (the backend skips ones that already exist),
    /// then refreshes the cached tag list once.
    pub async fn add(&self, names: &[String]) -> Result<()> {
        self.gateway.add_tags(names).await?;
        tracing::info!(count = names.len(), "tags submitted");
        self.refresh().await?;
        Ok(())
    }
}

/// Splits a comma-separated tag input string: trim each item, drop
/// blanks, de-duplicate keeping first occurrence.
pub fn parse_tag_input(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for item in raw.split(',') {
        let tag = item.trim();
        if !tag.is_empty() && !tags.iter().any(|seen| seen == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_input_is_trimmed_deduplicated_and_ordered() {
        assert_eq!(
            parse_tag_input(" rust , news,rust ,  , video,"),
            vec!["rust", "news", "video"]
        );
        assert!(parse_tag_input("  ,, ").is_empty());
        assert!(parse_tag_input("").is_empty());
    }
}
