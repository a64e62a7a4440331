use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Comment;

/// Blog entry with its comment thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Blog {
    pub id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(deserialize_with = "crate::serde_util::tags")]
    pub tags: Vec<String>,
    pub media: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    /// Newest first. Read-only: comments are saved through their own route.
    pub comments: Vec<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Blog {
    /// Publication time to store: the given one, or `now` for a freshly
    /// published entry that has none yet.
    pub fn effective_published_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self.published_at {
            None if self.is_published => Some(now),
            other => other,
        }
    }
}
