use super::Entity;
use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_ORG_ADMIN: &str = "org_admin";
pub const ROLE_ORG_MANAGER: &str = "org_manager";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub organization_id: Option<String>,
    pub language: Option<String>,
}

impl User {
    /// `admin` is a superset of `org_admin` and is treated identically
    /// wherever roles are checked.
    pub fn is_tenant_admin(&self) -> bool {
        self.role == ROLE_ADMIN || self.role == ROLE_ORG_ADMIN
    }
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }
}
