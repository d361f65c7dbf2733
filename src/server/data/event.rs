use chrono::Utc;
use entity::{event::Event, store::Store};

use crate::model::event::CreateEventDto;

pub struct EventRepository<'a> {
    store: &'a Store,
}

impl<'a> EventRepository<'a> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Creates a new event; `attendee_count` always starts at zero.
    pub fn create(&self, event: CreateEventDto, created_by: i32) -> Event {
        let mut tables = self.store.write();
        let now = Utc::now();

        tables.events.insert_with(|id| Event {
            id,
            title: event.title,
            description: event.description,
            event_type: event.event_type,
            start_date: event.start_date,
            end_date: event.end_date,
            location: event.location,
            is_virtual: event.is_virtual.unwrap_or(true),
            attendee_count: 0,
            created_by,
            created_at: now,
        })
    }

    /// Events sorted newest start date first, optionally capped.
    ///
    /// Ties keep insertion order.
    pub fn list(&self, limit: Option<usize>) -> Vec<Event> {
        let mut events = self.store.read().events.snapshot();
        events.sort_by(|a, b| b.start_date.cmp(&a.start_date));

        if let Some(limit) = limit {
            events.truncate(limit);
        }

        events
    }
}
