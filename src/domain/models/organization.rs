use super::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
}

impl Entity for Organization {
    fn id(&self) -> &str {
        &self.id
    }
}
