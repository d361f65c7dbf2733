use chrono::Utc;
use entity::{job::Job, store::Store};

use crate::model::job::CreateJobDto;

pub struct JobRepository<'a> {
    store: &'a Store,
}

impl<'a> JobRepository<'a> {
    /// Creates a new instance of [`JobRepository`]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Creates a new job posting.
    pub fn create(&self, job: CreateJobDto, posted_by: i32) -> Job {
        let mut tables = self.store.write();
        let now = Utc::now();

        tables.jobs.insert_with(|id| Job {
            id,
            title: job.title,
            company: job.company,
            company_logo: job.company_logo,
            location: job.location,
            description: job.description,
            salary: job.salary,
            job_type: job.job_type,
            industry: job.industry,
            tags: job.tags,
            posted_by,
            created_at: now,
        })
    }

    /// Jobs sorted newest first, optionally capped.
    pub fn list(&self, limit: Option<usize>) -> Vec<Job> {
        let mut jobs = self.store.read().jobs.snapshot();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(limit) = limit {
            jobs.truncate(limit);
        }

        jobs
    }
}
