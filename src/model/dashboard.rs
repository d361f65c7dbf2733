use serde::{Deserialize, Serialize};

use crate::model::{
    discussion::DiscussionDto, event::EventDto, job::JobDto, news::NewsDto, resource::ResourceDto,
};

/// The combined dashboard aggregate: a bounded slice of every collection.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DashboardDto {
    pub events: Vec<EventDto>,
    pub discussions: Vec<DiscussionDto>,
    pub jobs: Vec<JobDto>,
    pub resources: Vec<ResourceDto>,
    pub news: Vec<NewsDto>,
}
