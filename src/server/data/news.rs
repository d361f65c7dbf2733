use chrono::Utc;
use entity::{news::News, store::Store};

use crate::model::news::CreateNewsDto;

pub struct NewsRepository<'a> {
    store: &'a Store,
}

impl<'a> NewsRepository<'a> {
    /// Creates a new instance of [`NewsRepository`]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Creates a new news item.
    pub fn create(&self, news: CreateNewsDto) -> News {
        let mut tables = self.store.write();
        let now = Utc::now();

        tables.news.insert_with(|id| News {
            id,
            title: news.title,
            summary: news.summary,
            source: news.source,
            url: news.url,
            published_at: news.published_at,
            created_at: now,
        })
    }

    /// News sorted by publication date, newest first, optionally capped.
    pub fn list(&self, limit: Option<usize>) -> Vec<News> {
        let mut news = self.store.read().news.snapshot();
        news.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        if let Some(limit) = limit {
            news.truncate(limit);
        }

        news
    }
}
