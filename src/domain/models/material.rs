use super::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub description: Option<String>,
    /// Stamped from the caller on create when absent.
    pub organization_id: Option<String>,
}

impl Entity for Material {
    fn id(&self) -> &str {
        &self.id
    }
}
