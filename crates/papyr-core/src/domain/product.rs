use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product sold in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(deserialize_with = "crate::serde_util::tags")]
    pub tags: Vec<String>,
    pub media: String,
    #[serde(deserialize_with = "crate::serde_util::float")]
    pub price: f64,
    #[serde(deserialize_with = "crate::serde_util::number")]
    pub quantity: i32,
    pub is_published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
