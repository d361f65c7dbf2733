//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The
//! context includes a fresh in-memory entity store and a session over an
//! in-process session store for testing authentication flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use entity::{
    discussion::Discussion,
    event::Event,
    job::Job,
    news::News,
    resource::Resource,
    store::Store,
    user::{Role, User},
};
use tower_sessions::{MemoryStore, Session};

use crate::{error::TestError, fixtures::factory};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to the test environment:
/// - A fresh entity store
/// - A session backed by an in-process session store
/// - Fixture helpers for inserting rows directly into the store
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder)
/// rather than constructing it directly.
pub struct TestContext {
    /// Entity store shared with the code under test
    pub store: Store,
    /// Session for test authentication flows
    pub session: Session,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let session_store = Arc::new(MemoryStore::default());
        let session = Session::new(None, session_store, None);

        Self {
            store: Store::new(),
            session,
        }
    }

    /// Convert the store into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular
    /// dependency between the test-utils crate and the main irconnect crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<Store>,
    {
        T::from(self.store.clone())
    }

    /// Look up a fixture account by username.
    ///
    /// # Panics
    /// Panics when no account with the username exists.
    pub fn user(&self, username: &str) -> User {
        self.store
            .read()
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned()
            .unwrap_or_else(|| panic!("no fixture user named {:?}", username))
    }

    /// Insert an account directly into the store.
    ///
    /// The password is [`crate::constant::TEST_PASSWORD`], bcrypt-hashed.
    pub fn insert_user(&self, username: &str, role: Role) -> Result<User, TestError> {
        let password = factory::test_password_hash()?;

        Ok(self
            .store
            .write()
            .users
            .insert_with(|id| factory::user_record(id, username, role, &password)))
    }

    /// Insert an event directly into the store.
    pub fn insert_event(&self, title: &str, start_date: DateTime<Utc>) -> Event {
        self.store
            .write()
            .events
            .insert_with(|id| factory::event_record(id, title, start_date))
    }

    /// Insert a discussion directly into the store with an explicit creation
    /// time.
    pub fn insert_discussion(&self, title: &str, created_at: DateTime<Utc>) -> Discussion {
        self.store
            .write()
            .discussions
            .insert_with(|id| factory::discussion_record(id, title, created_at))
    }

    /// Insert a job posting directly into the store with an explicit creation
    /// time.
    pub fn insert_job(&self, title: &str, created_at: DateTime<Utc>) -> Job {
        self.store
            .write()
            .jobs
            .insert_with(|id| factory::job_record(id, title, created_at))
    }

    /// Insert a resource directly into the store with an explicit download
    /// count.
    pub fn insert_resource(&self, title: &str, download_count: i32) -> Resource {
        self.store
            .write()
            .resources
            .insert_with(|id| factory::resource_record(id, title, download_count))
    }

    /// Insert a news item directly into the store with an explicit
    /// publication time.
    pub fn insert_news(&self, title: &str, published_at: DateTime<Utc>) -> News {
        self.store
            .write()
            .news
            .insert_with(|id| factory::news_record(id, title, published_at))
    }
}
