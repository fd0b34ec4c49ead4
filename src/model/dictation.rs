use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DictationDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    /// `text` or `audio`
    #[serde(rename = "type")]
    pub kind: String,
    pub content: Option<String>,
    pub audio_url: Option<String>,
    pub language: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDictationDto {
    pub title: String,
    /// `text` or `audio`
    #[serde(rename = "type")]
    pub kind: String,
    pub content: Option<String>,
    pub audio_url: Option<String>,
    pub language: String,
}
