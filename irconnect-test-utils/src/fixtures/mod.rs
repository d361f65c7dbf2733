//! Fixture factories for records and request payloads.

pub mod factory;
