use entity::store::Store;

use crate::{
    model::dashboard::DashboardDto,
    server::data::{
        discussion::DiscussionRepository, event::EventRepository, job::JobRepository,
        news::NewsRepository, resource::ResourceRepository,
    },
};

const DASHBOARD_EVENT_LIMIT: usize = 2;
const DASHBOARD_DISCUSSION_LIMIT: usize = 2;
const DASHBOARD_JOB_LIMIT: usize = 2;
const DASHBOARD_RESOURCE_LIMIT: usize = 3;
const DASHBOARD_NEWS_LIMIT: usize = 2;

pub struct DashboardService<'a> {
    store: &'a Store,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Bounded slices of every collection, combined into the dashboard
    /// aggregate. Each list keeps its own sort order.
    pub fn summary(&self) -> DashboardDto {
        DashboardDto {
            events: EventRepository::new(self.store)
                .list(Some(DASHBOARD_EVENT_LIMIT))
                .into_iter()
                .map(Into::into)
                .collect(),
            discussions: DiscussionRepository::new(self.store)
                .list(Some(DASHBOARD_DISCUSSION_LIMIT))
                .into_iter()
                .map(Into::into)
                .collect(),
            jobs: JobRepository::new(self.store)
                .list(Some(DASHBOARD_JOB_LIMIT))
                .into_iter()
                .map(Into::into)
                .collect(),
            resources: ResourceRepository::new(self.store)
                .list(Some(DASHBOARD_RESOURCE_LIMIT))
                .into_iter()
                .map(Into::into)
                .collect(),
            news: NewsRepository::new(self.store)
                .list(Some(DASHBOARD_NEWS_LIMIT))
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
