use crate::domain::models::database::Database;
use crate::domain::ports::DocumentStore;
use crate::error::AppError;
use crate::infra::seed;
use async_trait::async_trait;
use std::sync::Mutex;

/// Non-persistent document store, seeded lazily on first load. Used by
/// the test suite and `STORE_PATH=:memory:`.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Option<Database>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<Database, AppError> {
        let mut guard = self.inner.lock().expect("memory store poisoned");
        Ok(guard.get_or_insert_with(seed::default_database).clone())
    }

    async fn save(&self, db: &Database) -> Result<(), AppError> {
        let mut guard = self.inner.lock().expect("memory store poisoned");
        *guard = Some(db.clone());
        Ok(())
    }
}
