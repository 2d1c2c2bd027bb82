use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Action;

#[async_trait]
pub trait ActionRepo: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Action>>;

    async fn insert(&self, entity: &Action) -> anyhow::Result<Uuid>;

    async fn list_by_work_order(&self, work_order_id: Uuid) -> anyhow::Result<Vec<Action>>;

    /// Deleting an action also drops its technician assignment rows.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
