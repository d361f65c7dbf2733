use chrono::Utc;
use entity::{resource::Resource, store::Store};

use crate::model::resource::CreateResourceDto;

pub struct ResourceRepository<'a> {
    store: &'a Store,
}

impl<'a> ResourceRepository<'a> {
    /// Creates a new instance of [`ResourceRepository`]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Creates a new resource; the download and view counters start at zero.
    pub fn create(&self, resource: CreateResourceDto, uploaded_by: i32) -> Resource {
        let mut tables = self.store.write();
        let now = Utc::now();

        tables.resources.insert_with(|id| Resource {
            id,
            title: resource.title,
            description: resource.description,
            resource_type: resource.resource_type,
            file_size: resource.file_size,
            thumbnail_url: resource.thumbnail_url,
            download_count: 0,
            view_count: 0,
            uploaded_by,
            created_at: now,
        })
    }

    /// Resources sorted by download count, highest first, optionally capped.
    ///
    /// Ties keep insertion order.
    pub fn list(&self, limit: Option<usize>) -> Vec<Resource> {
        let mut resources = self.store.read().resources.snapshot();
        resources.sort_by(|a, b| b.download_count.cmp(&a.download_count));

        if let Some(limit) = limit {
            resources.truncate(limit);
        }

        resources
    }
}
