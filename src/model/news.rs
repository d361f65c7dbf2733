use chrono::{DateTime, Utc};
use entity::news::News;
use serde::{Deserialize, Serialize};

/// An industry news item as exposed to API clients.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsDto {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<News> for NewsDto {
    fn from(news: News) -> Self {
        Self {
            id: news.id,
            title: news.title,
            summary: news.summary,
            source: news.source,
            url: news.url,
            published_at: news.published_at,
            created_at: news.created_at,
        }
    }
}

/// Payload for publishing a news item. Publishing is restricted to
/// administrator accounts.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsDto {
    pub title: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
}
