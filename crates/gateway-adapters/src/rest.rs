//! # REST gateway
//!
//! This module implements the mapping between the backend's JSON wire
//! format and the `domains` models — one method per endpoint of the
//! Watermark CMS contract.

use std::time::Duration;

use async_trait::async_trait;
use domains::{
    AppError, CmsGateway, Envelope, Message, MessageDraft, MessageQuery, Result, Tag, TagQuery,
};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use url::Url;

/// Every non-2xx backend response carries `{ "msg": ... }`.
#[derive(Debug, Deserialize)]
struct BackendNote {
    msg: String,
}

pub struct RestCmsGateway {
    base_url: Url,
    client: reqwest::Client,
}

impl RestCmsGateway {
    pub fn new(mut base_url: Url, timeout: Duration) -> Result<Self> {
        // Url::join replaces the last path segment unless the base ends
        // with a slash.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Internal(err.to_string()))?;
        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|err| AppError::Internal(format!("bad endpoint {path}: {err}")))
    }
}

#[async_trait]
impl CmsGateway for RestCmsGateway {
    #[tracing::instrument(skip_all, name = "RestCmsGateway::list_messages", err)]
    async fn list_messages(&self, query: &MessageQuery) -> Result<Vec<Message>> {
        let mut url = self.endpoint("messages")?;
        {
            let mut pairs = url.query_pairs_mut();
            if !query.ids.is_empty() {
                pairs.append_pair("id", &join_ids(&query.ids));
            }
            if !query.titles.is_empty() {
                pairs.append_pair("title", &query.titles.join(","));
            }
            if !query.tags.is_empty() {
                pairs.append_pair("tag", &query.tags.join(","));
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        tracing::debug!(%url, "fetching messages");

        let response = self.client.get(url).send().await.map_err(transport)?;
        let envelope: Envelope<Vec<Message>> = accepted(response)
            .await?
            .json()
            .await
            .map_err(|err| AppError::Internal(format!("malformed message list: {err}")))?;
        Ok(envelope.data)
    }

    async fn list_tags(&self, query: &TagQuery) -> Result<Vec<Tag>> {
        let mut url = self.endpoint("tags")?;
        {
            let mut pairs = url.query_pairs_mut();
            if !query.ids.is_empty() {
                pairs.append_pair("id", &join_ids(&query.ids));
            }
            if !query.names.is_empty() {
                pairs.append_pair("name", &query.names.join(","));
            }
            if !query.messages.is_empty() {
                pairs.append_pair("message", &query.messages.join(","));
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        let response = self.client.get(url).send().await.map_err(transport)?;
        let envelope: Envelope<Vec<Tag>> = accepted(response)
            .await?
            .json()
            .await
            .map_err(|err| AppError::Internal(format!("malformed tag list: {err}")))?;
        Ok(envelope.data)
    }

    #[tracing::instrument(skip_all, name = "RestCmsGateway::create_message", fields(title = %draft.title), err)]
    async fn create_message(&self, draft: &MessageDraft) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint("messages")?)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        accepted(response).await?;
        Ok(())
    }

    async fn update_message(&self, id: i64, draft: &MessageDraft) -> Result<()> {
        let mut url = self.endpoint("messages")?;
        url.query_pairs_mut().append_pair("id", &id.to_string());

        let response = self
            .client
            .put(url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound("message".to_string(), id.to_string()));
        }
        accepted(response).await?;
        Ok(())
    }

    async fn add_tags(&self, names: &[String]) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint("tags")?)
            .json(&serde_json::json!({ "tags": names }))
            .send()
            .await
            .map_err(transport)?;
        accepted(response).await?;
        Ok(())
    }

    async fn assign_tags(&self, message_ids: &[i64], tag_ids: &[i64]) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint("message_tags")?)
            .json(&serde_json::json!({
                "message_ids": message_ids,
                "tag_ids": tag_ids,
            }))
            .send()
            .await
            .map_err(transport)?;
        accepted(response).await?;
        Ok(())
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn transport(err: reqwest::Error) -> AppError {
    AppError::Unreachable(err.to_string())
}

/// Passes 2xx responses through; turns everything else into the mapped
/// error, preserving the backend's note when one is present.
async fn accepted(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let note = response
        .json::<BackendNote>()
        .await
        .map(|n| n.msg)
        .unwrap_or_else(|_| status.to_string());
    Err(match status {
        StatusCode::BAD_REQUEST => AppError::Rejected(note),
        _ => AppError::Backend {
            status: status.as_u16(),
            note,
        },
    })
}
