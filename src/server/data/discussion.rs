use chrono::Utc;
use entity::{discussion::Discussion, store::Store};

use crate::model::discussion::CreateDiscussionDto;

pub struct DiscussionRepository<'a> {
    store: &'a Store,
}

impl<'a> DiscussionRepository<'a> {
    /// Creates a new instance of [`DiscussionRepository`]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Creates a new discussion; `reply_count` starts at zero and `is_hot`
    /// at false.
    pub fn create(&self, discussion: CreateDiscussionDto, author_id: i32) -> Discussion {
        let mut tables = self.store.write();
        let now = Utc::now();

        tables.discussions.insert_with(|id| Discussion {
            id,
            title: discussion.title,
            content: discussion.content,
            category: discussion.category,
            tags: discussion.tags,
            author_id,
            reply_count: 0,
            is_hot: false,
            created_at: now,
        })
    }

    /// Discussions sorted newest first, optionally capped.
    pub fn list(&self, limit: Option<usize>) -> Vec<Discussion> {
        let mut discussions = self.store.read().discussions.snapshot();
        discussions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(limit) = limit {
            discussions.truncate(limit);
        }

        discussions
    }
}
