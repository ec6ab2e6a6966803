use crate::domain::collection::Collection;
use crate::domain::models::{
    assignment,
    database::{encode, Database},
    site::Site,
    user::{self, User},
};
use crate::domain::services::policy;
use crate::error::AppError;
use serde_json::Value;
use std::collections::HashSet;

/// List projection with the two collection-specific scopes: managers see
/// only the sites they manage, and materials are scoped to the caller's
/// organization. Everything else lists unfiltered.
pub fn scoped_list(db: &Database, collection: Collection, caller: Option<&User>) -> Result<Value, AppError> {
    match collection {
        Collection::Sites => {
            if let Some(manager) = caller.filter(|u| u.role == user::ROLE_ORG_MANAGER) {
                return encode(&managed_sites(db, manager));
            }
            db.list(collection)
        }
        Collection::Materials => {
            if let Some(org_id) = caller.and_then(|u| u.organization_id.as_deref()) {
                let materials: Vec<_> = db
                    .materials
                    .iter()
                    .filter(|m| m.organization_id.as_deref() == Some(org_id))
                    .collect();
                return encode(&materials);
            }
            db.list(collection)
        }
        _ => db.list(collection),
    }
}

/// Sites where the manager's worker record holds a `site_manager`
/// assignment. A manager with no worker record sees nothing.
fn managed_sites<'a>(db: &'a Database, manager: &User) -> Vec<&'a Site> {
    let Some(worker) = policy::find_worker_for_user(db, manager) else {
        return Vec::new();
    };
    let managed: HashSet<&str> = db
        .assignments
        .iter()
        .filter(|a| a.worker_id == worker.id && a.role == assignment::ROLE_SITE_MANAGER)
        .map(|a| a.site_id.as_str())
        .collect();
    db.sites
        .iter()
        .filter(|s| managed.contains(s.id.as_str()))
        .collect()
}
