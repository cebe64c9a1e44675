use crate::infrastructure::storage::DynStorage;

/// Shared across requests. The storage handle is the only mutable state.
#[derive(Clone)]
pub struct AppState {
    pub storage: DynStorage,
}

impl AppState {
    pub fn new(storage: DynStorage) -> Self {
        Self { storage }
    }
}
