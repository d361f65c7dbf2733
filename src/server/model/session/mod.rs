//! Typed wrappers around session data.

pub mod user;
