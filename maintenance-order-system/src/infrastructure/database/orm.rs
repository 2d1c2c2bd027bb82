use std::sync::Arc;

use sea_orm::DatabaseConnection;
use typed_builder::TypedBuilder;

/// One sea-orm backed repository implementing every domain repository trait.
/// Cheap to clone behind `Arc`; acquired per request through the service
/// provider.
#[derive(TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<DatabaseConnection>,
}

impl OrmRepo {
    pub fn con(&self) -> &DatabaseConnection {
        &self.db
    }
}
