use super::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const STATUS_PLANNING: &str = "planning";
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_ON_HOLD: &str = "on_hold";
pub const STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub organization_id: String,
    pub client_id: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Entity for Site {
    fn id(&self) -> &str {
        &self.id
    }
}
