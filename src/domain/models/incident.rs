use super::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored and served via generic CRUD; no incident-specific rules.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub site_id: String,
    pub date: NaiveDate,
    /// User id of the reporter.
    pub reported_by: String,
    pub severity: String,
    pub description: String,
    pub resolved: bool,
}

impl Entity for Incident {
    fn id(&self) -> &str {
        &self.id
    }
}
