use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog entry as stored in the `infographics` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct InfographicRecord {
    // System fields
    pub id: i64,
    pub created_at: DateTime<Utc>,

    pub title: String,
    pub thumbnail_url: String,
    pub page_url: String,

    // Optional fields, serialized as null when absent
    pub description: Option<String>,
    pub category: Option<String>,
    pub category_color: Option<String>,
}

/// Payload for creating a catalog entry.
/// Missing and `null` optional fields both mean "not set".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInfographic {
    pub title: String,
    pub thumbnail_url: String,
    pub page_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub category_color: Option<String>,
}
