//! Blog post domain entity
//!
//! Models a published post exactly as the backend API serves it.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlogId(pub i64);

impl From<i64> for BlogId {
    fn from(id: i64) -> Self {
        BlogId(id)
    }
}

impl std::fmt::Display for BlogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content kind of a blog post
///
/// Drives the preview and detail rendering. Tags this service does not
/// recognize land in `Other` so one new backend content type never fails
/// a whole list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    Image,
    Video,
    Text,
    ImageText,
    Other(String),
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        match s {
            "image" => ContentType::Image,
            "video" => ContentType::Video,
            "text" => ContentType::Text,
            "image_text" => ContentType::ImageText,
            other => ContentType::Other(other.to_string()),
        }
    }
}

impl From<String> for ContentType {
    fn from(s: String) -> Self {
        ContentType::from(s.as_str())
    }
}

impl From<ContentType> for String {
    fn from(c: ContentType) -> Self {
        c.to_string()
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Image => write!(f, "image"),
            ContentType::Video => write!(f, "video"),
            ContentType::Text => write!(f, "text"),
            ContentType::ImageText => write!(f, "image_text"),
            ContentType::Other(s) => write!(f, "{}", s),
        }
    }
}

/// The backend emits either an RFC 3339 timestamp or a naive ISO 8601 one
/// depending on how the row was written. Accept both.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
        })
        .map_err(serde::de::Error::custom)
}

/// A blog post as served by the backend API
///
/// `content_url`, `caption` and `text_content` are optional; which of them
/// a post carries depends on its `content_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub category: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    pub content_type: ContentType,
    pub content_url: Option<String>,
    pub caption: Option<String>,
    pub text_content: Option<String>,
}
