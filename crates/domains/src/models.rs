//! # Domain Models
//!
//! These structs represent the core entities of the Watermark CMS client.
//! Identifiers are plain integers because the backend assigns them; the
//! client never mints an id of its own.

use mime::Mime;
use serde::{Deserialize, Serialize};

/// A content item managed by the CMS: title, description, optional media
/// URLs, and a set of tag names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Image URL, already validated at submission time
    pub thumbnail: Option<String>,
    /// Video URL, already validated at submission time
    #[serde(default)]
    pub video: Option<String>,
    /// Backend-generated transcript of the video, when one was requested
    #[serde(default)]
    pub transcript: Option<String>,
    /// Tag names; order carries no meaning
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A label assignable to messages for filtering and grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// The submission payload for creating or editing a message.
///
/// Optional fields are omitted from the JSON body when unset, matching what
/// the backend expects for "no thumbnail" vs "thumbnail present".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageDraft {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Asks the backend to transcribe the video on ingest
    #[serde(skip_serializing_if = "is_false")]
    pub gen_transcript: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Server-side filters for `GET /messages`. Each list is joined
/// comma-separated into a single query parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageQuery {
    pub ids: Vec<i64>,
    pub titles: Vec<String>,
    /// Tag names; a message matches when any of its tags is named
    pub tags: Vec<String>,
}

impl MessageQuery {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.titles.is_empty() && self.tags.is_empty()
    }
}

/// Server-side filters for `GET /tags`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagQuery {
    pub ids: Vec<i64>,
    pub names: Vec<String>,
    /// Message-title substrings; a tag matches when assigned to a matching message
    pub messages: Vec<String>,
}

impl TagQuery {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.names.is_empty() && self.messages.is_empty()
    }
}

/// The wire wrapper every list endpoint uses: `{ "data": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// The draft attribute a validation rejection points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Thumbnail,
    Video,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::Thumbnail => "thumbnail",
            DraftField::Video => "video",
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first failing check of a validation attempt: which field and why.
/// Transient — produced per attempt, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub field: DraftField,
    pub note: String,
}

impl Rejection {
    pub fn new(field: DraftField, note: impl Into<String>) -> Self {
        Self {
            field,
            note: note.into(),
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.note)
    }
}

/// What a probe learned about a remote media resource. A GET probe knows
/// the exact body size; a HEAD probe usually only knows the content-type.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteMedia {
    pub content_type: Option<Mime>,
    pub size: Option<u64>,
}
