use super::Entity;
use serde::{Deserialize, Serialize};

/// Clients are not organization-scoped.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

impl Entity for Client {
    fn id(&self) -> &str {
        &self.id
    }
}
