use super::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One log per (site, date).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub id: String,
    pub site_id: String,
    pub date: NaiveDate,
    /// User id of the author.
    pub created_by: String,
    pub notes: Option<String>,
}

impl Entity for DailyLog {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A worker's hours within a daily log. Times are `HH:MM` strings.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogEntry {
    pub id: String,
    pub daily_log_id: String,
    pub worker_id: String,
    pub start_time: String,
    pub end_time: String,
    pub break_minutes: i32,
    pub notes: Option<String>,
}

impl Entity for DailyLogEntry {
    fn id(&self) -> &str {
        &self.id
    }
}
