use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event with a date and an optional location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "crate::serde_util::tags")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub media: String,
    #[serde(default)]
    pub is_published: bool,
    pub date: DateTime<Utc>,
    #[serde(default, deserialize_with = "crate::serde_util::optional_float")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "crate::serde_util::optional_float")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Create an unsaved event on `date`.
    pub fn new(title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: title.into(),
            slug: String::new(),
            content: String::new(),
            tags: Vec::new(),
            media: String::new(),
            is_published: false,
            date,
            latitude: None,
            longitude: None,
            address: String::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_sent_as_strings() {
        let event: Event = serde_json::from_str(
            r#"{"title": "Meetup", "date": "2024-06-01T18:00:00Z",
                "latitude": "52.52", "longitude": "13.405"}"#,
        )
        .unwrap();

        assert_eq!(event.latitude, Some(52.52));
        assert_eq!(event.longitude, Some(13.405));
    }

    #[test]
    fn test_date_is_required() {
        let result = serde_json::from_str::<Event>(r#"{"title": "Meetup"}"#);
        assert!(result.is_err());
    }
}
