use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::domain::ports::DocumentStore;
use crate::infra::repositories::{json_file_store::JsonFileStore, memory_store::MemoryStore};
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> AppState {
    let store: Arc<dyn DocumentStore> = if config.store_path == ":memory:" {
        info!("Initializing in-memory document store...");
        Arc::new(MemoryStore::new())
    } else {
        info!("Initializing JSON file store at {}...", config.store_path);
        Arc::new(JsonFileStore::new(config.store_path.clone()))
    };

    AppState::new(config.clone(), store)
}
