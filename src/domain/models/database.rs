use super::{
    assignment::SiteAssignment,
    client::Client,
    daily_log::{DailyLog, DailyLogEntry},
    incident::Incident,
    material::Material,
    organization::Organization,
    site::Site,
    site_material::SiteMaterial,
    user::User,
    worker::Worker,
    Entity,
};
use crate::domain::collection::Collection;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// The whole persisted document. Loaded, mutated and rewritten as a unit
/// on every request; there are no partial writes.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    pub organizations: Vec<Organization>,
    pub users: Vec<User>,
    pub workers: Vec<Worker>,
    pub materials: Vec<Material>,
    pub sites: Vec<Site>,
    pub assignments: Vec<SiteAssignment>,
    pub site_materials: Vec<SiteMaterial>,
    pub daily_logs: Vec<DailyLog>,
    pub daily_log_entries: Vec<DailyLogEntry>,
    pub clients: Vec<Client>,
    pub incidents: Vec<Incident>,
    /// Id of the org admin's worker record, captured at seed time. That
    /// worker is the bootstrap identity and must never be deletable.
    #[serde(default)]
    pub admin_worker_id: Option<String>,
}

impl Database {
    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn list(&self, collection: Collection) -> Result<Value, AppError> {
        match collection {
            Collection::Users => encode(&self.users),
            Collection::Workers => encode(&self.workers),
            Collection::Materials => encode(&self.materials),
            Collection::Sites => encode(&self.sites),
            Collection::Assignments => encode(&self.assignments),
            Collection::SiteMaterials => encode(&self.site_materials),
            Collection::DailyLogs => encode(&self.daily_logs),
            Collection::DailyLogEntries => encode(&self.daily_log_entries),
            Collection::Clients => encode(&self.clients),
            Collection::Incidents => encode(&self.incidents),
        }
    }

    pub fn find(&self, collection: Collection, id: &str) -> Result<Value, AppError> {
        match collection {
            Collection::Users => find_in(&self.users, collection, id),
            Collection::Workers => find_in(&self.workers, collection, id),
            Collection::Materials => find_in(&self.materials, collection, id),
            Collection::Sites => find_in(&self.sites, collection, id),
            Collection::Assignments => find_in(&self.assignments, collection, id),
            Collection::SiteMaterials => find_in(&self.site_materials, collection, id),
            Collection::DailyLogs => find_in(&self.daily_logs, collection, id),
            Collection::DailyLogEntries => find_in(&self.daily_log_entries, collection, id),
            Collection::Clients => find_in(&self.clients, collection, id),
            Collection::Incidents => find_in(&self.incidents, collection, id),
        }
    }

    /// Appends a new item, generating an id when the body carries none.
    /// Returns the stored item.
    pub fn insert(&mut self, collection: Collection, body: Value) -> Result<Value, AppError> {
        match collection {
            Collection::Users => insert_into(&mut self.users, collection, body),
            Collection::Workers => insert_into(&mut self.workers, collection, body),
            Collection::Materials => insert_into(&mut self.materials, collection, body),
            Collection::Sites => insert_into(&mut self.sites, collection, body),
            Collection::Assignments => insert_into(&mut self.assignments, collection, body),
            Collection::SiteMaterials => insert_into(&mut self.site_materials, collection, body),
            Collection::DailyLogs => insert_into(&mut self.daily_logs, collection, body),
            Collection::DailyLogEntries => insert_into(&mut self.daily_log_entries, collection, body),
            Collection::Clients => insert_into(&mut self.clients, collection, body),
            Collection::Incidents => insert_into(&mut self.incidents, collection, body),
        }
    }

    /// Wholesale replace. The id always comes from the request path, not
    /// the body.
    pub fn replace(&mut self, collection: Collection, id: &str, body: Value) -> Result<Value, AppError> {
        match collection {
            Collection::Users => replace_in(&mut self.users, collection, id, body),
            Collection::Workers => replace_in(&mut self.workers, collection, id, body),
            Collection::Materials => replace_in(&mut self.materials, collection, id, body),
            Collection::Sites => replace_in(&mut self.sites, collection, id, body),
            Collection::Assignments => replace_in(&mut self.assignments, collection, id, body),
            Collection::SiteMaterials => replace_in(&mut self.site_materials, collection, id, body),
            Collection::DailyLogs => replace_in(&mut self.daily_logs, collection, id, body),
            Collection::DailyLogEntries => replace_in(&mut self.daily_log_entries, collection, id, body),
            Collection::Clients => replace_in(&mut self.clients, collection, id, body),
            Collection::Incidents => replace_in(&mut self.incidents, collection, id, body),
        }
    }

    pub fn remove(&mut self, collection: Collection, id: &str) -> Result<(), AppError> {
        match collection {
            Collection::Users => remove_from(&mut self.users, collection, id),
            Collection::Workers => remove_from(&mut self.workers, collection, id),
            Collection::Materials => remove_from(&mut self.materials, collection, id),
            Collection::Sites => remove_from(&mut self.sites, collection, id),
            Collection::Assignments => remove_from(&mut self.assignments, collection, id),
            Collection::SiteMaterials => remove_from(&mut self.site_materials, collection, id),
            Collection::DailyLogs => remove_from(&mut self.daily_logs, collection, id),
            Collection::DailyLogEntries => remove_from(&mut self.daily_log_entries, collection, id),
            Collection::Clients => remove_from(&mut self.clients, collection, id),
            Collection::Incidents => remove_from(&mut self.incidents, collection, id),
        }
    }
}

pub fn encode<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(AppError::Serialization)
}

fn decode<T: Entity>(collection: Collection, body: Value) -> Result<T, AppError> {
    serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("Invalid {} payload: {}", collection.key(), e)))
}

fn not_found(collection: Collection, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id {} not found", collection.key(), id))
}

fn find_in<T: Entity>(items: &[T], collection: Collection, id: &str) -> Result<Value, AppError> {
    let item = items
        .iter()
        .find(|item| item.id() == id)
        .ok_or_else(|| not_found(collection, id))?;
    encode(item)
}

fn insert_into<T: Entity>(items: &mut Vec<T>, collection: Collection, body: Value) -> Result<Value, AppError> {
    let item: T = decode(collection, with_generated_id(body))?;
    let stored = encode(&item)?;
    items.push(item);
    Ok(stored)
}

fn replace_in<T: Entity>(items: &mut [T], collection: Collection, id: &str, body: Value) -> Result<Value, AppError> {
    let index = items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| not_found(collection, id))?;
    let item: T = decode(collection, with_id(body, id))?;
    let stored = encode(&item)?;
    items[index] = item;
    Ok(stored)
}

fn remove_from<T: Entity>(items: &mut Vec<T>, collection: Collection, id: &str) -> Result<(), AppError> {
    let index = items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| not_found(collection, id))?;
    items.remove(index);
    Ok(())
}

/// Fills in a fresh UUID when the body has no usable id.
fn with_generated_id(mut body: Value) -> Value {
    if let Value::Object(ref mut map) = body {
        let missing = match map.get("id") {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            _ => false,
        };
        if missing {
            map.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        }
    }
    body
}

/// Forces the body's id to the given one, overriding whatever the caller
/// sent.
fn with_id(mut body: Value, id: &str) -> Value {
    if let Value::Object(ref mut map) = body {
        map.insert("id".to_string(), Value::String(id.to_string()));
    }
    body
}
