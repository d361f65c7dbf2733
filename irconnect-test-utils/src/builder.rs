//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test
//! environments before execution. Configuration methods chain together, with
//! all fixture insertion performed during the final `build()` call.

use entity::user::Role;

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Queues fixture accounts to insert and finalizes with `build()` to create
/// a complete [`TestContext`].
pub struct TestBuilder {
    users: Vec<(String, Role)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no fixtures queued.
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Queue a professional account for insertion during `build()`.
    ///
    /// The account's password is [`crate::constant::TEST_PASSWORD`] and its
    /// email is derived from the username.
    pub fn with_user(mut self, username: &str) -> Self {
        self.users.push((username.to_string(), Role::Professional));
        self
    }

    /// Queue a company account for insertion during `build()`.
    pub fn with_company(mut self, username: &str) -> Self {
        self.users.push((username.to_string(), Role::Company));
        self
    }

    /// Queue an administrator account for insertion during `build()`.
    pub fn with_admin(mut self, username: &str) -> Self {
        self.users.push((username.to_string(), Role::Admin));
        self
    }

    /// Build the test context and insert all queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::HashError)` - Fixture password hashing failed
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new();

        for (username, role) in self.users {
            context.insert_user(&username, role)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
