use super::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SiteMaterial {
    pub id: String,
    pub site_id: String,
    pub material_id: String,
    pub planned_qty: Option<f64>,
    pub actual_qty: Option<f64>,
}

impl Entity for SiteMaterial {
    fn id(&self) -> &str {
        &self.id
    }
}
