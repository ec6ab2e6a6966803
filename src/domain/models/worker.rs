use super::Entity;
use serde::{Deserialize, Serialize};

/// A worker on a construction site. A worker may also hold a user
/// account; the link is by email equality, not a foreign key.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// The store does not enforce the organization link; callers may
    /// create a worker before wiring it to an organization.
    pub organization_id: Option<String>,
}

impl Entity for Worker {
    fn id(&self) -> &str {
        &self.id
    }
}
