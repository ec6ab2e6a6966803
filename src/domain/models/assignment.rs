use super::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const ROLE_SITE_MANAGER: &str = "site_manager";
pub const ROLE_WORKER: &str = "worker";

/// Links a worker to a site. The UI assumes at most one active
/// `site_manager` assignment per site; the store does not enforce this,
/// callers must delete the prior manager assignment before creating a
/// new one.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SiteAssignment {
    pub id: String,
    pub site_id: String,
    pub worker_id: String,
    pub role: String,
    pub assigned_date: NaiveDate,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Entity for SiteAssignment {
    fn id(&self) -> &str {
        &self.id
    }
}
