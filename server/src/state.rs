use std::sync::Arc;

use crate::storage::ItemRepository;

/// Shared application state, cloned into every handler.
///
/// The repository is the only thing shared between requests. It is created by
/// the bootstrap code and injected here rather than held in a global.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    pub fn new(items: impl ItemRepository + 'static) -> Self {
        Self {
            items: Arc::new(items),
        }
    }
}
