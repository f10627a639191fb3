pub mod config;
pub mod error;
pub mod response;
pub mod store;
pub mod types;
pub mod users;
pub mod validators;

use std::sync::Arc;
use store::RecordStore;

/// Shared application state, built once per cold start
pub struct AppState {
    pub store: Box<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: impl RecordStore + 'static) -> Arc<Self> {
        Arc::new(Self {
            store: Box::new(store),
        })
    }
}
