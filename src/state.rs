use crate::config::Config;
use crate::domain::ports::DocumentStore;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn DocumentStore>,
    /// Serializes each request's load-check-mutate-save sequence. The
    /// store is one shared document rewritten whole on every mutation;
    /// without this gate two requests could interleave their
    /// read-modify-write cycles and lose updates.
    pub store_gate: Mutex<()>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config,
            store,
            store_gate: Mutex::new(()),
        }
    }
}
