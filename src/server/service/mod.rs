//! Service layer for business logic and orchestration.
//!
//! Services implement the business rules sitting between the controllers and
//! the repositories: account registration and credential checks, and the
//! dashboard aggregate.

pub mod auth;
pub mod dashboard;
