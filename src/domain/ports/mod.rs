use crate::domain::models::database::Database;
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence port for the entity store. Implementations deal in the
/// whole document: `load` returns the current snapshot (seeding a
/// default dataset on first access), `save` replaces any prior content.
/// No merge semantics, no versioning, no transactions; callers
/// serialize their load-mutate-save cycles themselves.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn load(&self) -> Result<Database, AppError>;
    async fn save(&self, db: &Database) -> Result<(), AppError>;
}
