use entity::store::Store;

/// Shared application state injected into every handler.
///
/// The store is constructed once at process start and torn down at process
/// exit; there is no implicit global.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl From<Store> for AppState {
    fn from(store: Store) -> Self {
        Self { store }
    }
}
