//! Process-wide in-memory entity collections.
//!
//! The store is the sole owner of entity state. Each kind lives in its own
//! [`Table`] with a monotonically increasing identifier counter; identifiers
//! start at 1 and are never reused within a process lifetime. All access goes
//! through a single `RwLock`, so every insert or replace is one atomic step
//! against the backing collection.

use std::{
    collections::BTreeMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{
    discussion::Discussion, event::Event, job::Job, news::News, resource::Resource, user::User,
};

/// A single keyed entity collection with sequential identifier assignment.
pub struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assigns the next identifier, builds the row with it, stores the row,
    /// and returns it.
    pub fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let row = build(id);
        self.rows.insert(id, row.clone());

        row
    }

    pub fn get(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Replaces an existing row. Rows that were never inserted are not
    /// created; the identifier counter only ever advances through
    /// [`Table::insert_with`].
    pub fn replace(&mut self, id: i32, row: T) -> bool {
        if !self.rows.contains_key(&id) {
            return false;
        }

        self.rows.insert(id, row);
        true
    }

    /// Iterates rows in insertion order.
    ///
    /// Identifiers are assigned in increasing order, so the key order of the
    /// backing map is the insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Copies all rows out in insertion order.
    pub fn snapshot(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// The identifier the next insert will receive.
    pub fn next_id(&self) -> i32 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Backing collections for every entity kind.
pub struct Tables {
    pub users: Table<User>,
    pub events: Table<Event>,
    pub discussions: Table<Discussion>,
    pub jobs: Table<Job>,
    pub resources: Table<Resource>,
    pub news: Table<News>,
}

/// Shared handle to the process-wide entity store.
///
/// Constructed once at startup and injected into the API layer; cloning is
/// cheap and refers to the same collections. State lives only in process
/// memory and is lost on restart.
#[derive(Clone)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                users: Table::new(),
                events: Table::new(),
                discussions: Table::new(),
                jobs: Table::new(),
                resources: Table::new(),
                news: Table::new(),
            })),
        }
    }

    /// Acquires shared read access to all collections.
    pub fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires exclusive write access to all collections.
    pub fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
