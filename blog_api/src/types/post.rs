use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hex-encoded document id assigned by the store.
pub type PostID = String;

/// A blog post as returned by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: PostID,

    pub title: String,

    pub author: String,

    pub content: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    pub published: bool,

    /// Set by the backend when the post first becomes published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

/// Body of `POST posts` and `PUT posts/{id}`. Timestamps are owned by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PostInput {
    pub title: String,
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

/// Response of `POST posts`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Inserted {
    #[serde(rename = "insertedID")]
    pub inserted_id: PostID,
}
