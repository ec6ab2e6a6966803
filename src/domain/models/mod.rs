pub mod assignment;
pub mod client;
pub mod daily_log;
pub mod database;
pub mod incident;
pub mod material;
pub mod organization;
pub mod site;
pub mod site_material;
pub mod user;
pub mod worker;

use serde::{de::DeserializeOwned, Serialize};

/// Implemented by every stored entity so the generic collection
/// operations can match items by id.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync {
    fn id(&self) -> &str;
}
