use chrono::{DateTime, Utc};
use entity::discussion::Discussion;
use serde::{Deserialize, Serialize};

/// A discussion thread as exposed to API clients.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Option<Vec<String>>,
    pub author_id: i32,
    pub reply_count: i32,
    pub is_hot: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Discussion> for DiscussionDto {
    fn from(discussion: Discussion) -> Self {
        Self {
            id: discussion.id,
            title: discussion.title,
            content: discussion.content,
            category: discussion.category,
            tags: discussion.tags,
            author_id: discussion.author_id,
            reply_count: discussion.reply_count,
            is_hot: discussion.is_hot,
            created_at: discussion.created_at,
        }
    }
}

/// Payload for starting a discussion.
///
/// The author is attached from the authenticated session; `reply_count` and
/// `is_hot` are derived and ignored if supplied.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateDiscussionDto {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Option<Vec<String>>,
}
