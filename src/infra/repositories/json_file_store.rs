use crate::domain::models::database::Database;
use crate::domain::ports::DocumentStore;
use crate::error::AppError;
use crate::infra::seed;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

/// File-backed document store: one JSON file, read whole on load and
/// rewritten whole on save. Seeds the demo dataset when the file does
/// not exist yet.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Result<Database, AppError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No store at {}, seeding demo dataset", self.path.display());
                let db = seed::default_database();
                self.save(&db).await?;
                Ok(db)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, db: &Database) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(db)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
