//! Entity records and the in-memory store backing the IR Connect platform.
//!
//! This crate owns the domain records for the six entity kinds (users, events,
//! discussions, jobs, resources, news) and the process-wide [`store::Store`]
//! holding them. The application crate layers repositories, derivation rules,
//! and query operations on top of these types.

pub mod discussion;
pub mod event;
pub mod job;
pub mod news;
pub mod resource;
pub mod store;
pub mod user;

pub mod prelude {
    pub use crate::{
        discussion::Discussion,
        event::Event,
        job::Job,
        news::News,
        resource::Resource,
        store::Store,
        user::{Role, User},
    };
}
