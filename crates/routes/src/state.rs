use sqlrange_storage::LevelStore;

/// Shared application state.
///
/// The level catalog is the only shared resource, and request handling
/// never writes to it; ephemeral attempt instances live and die inside the
/// engine, below this layer.
#[derive(Clone)]
pub struct AppState {
    pub store: LevelStore,
}

impl AppState {
    pub fn new(store: LevelStore) -> Self {
        Self { store }
    }
}
