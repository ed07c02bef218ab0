use std::sync::Arc;

use crate::config::Config;
use crate::store::{DocumentStore, MongoStore};

/// One store for the whole process, shared by every repository.
pub async fn init_store(config: &Config) -> Arc<dyn DocumentStore> {
    Arc::new(MongoStore::connect(&config.mongodb_uri, &config.database_name).await)
}
