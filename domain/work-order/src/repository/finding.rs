use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Finding;

#[async_trait]
pub trait FindingRepo: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Finding>>;

    async fn insert(&self, entity: &Finding) -> anyhow::Result<Uuid>;

    async fn list_by_work_order(&self, work_order_id: Uuid) -> anyhow::Result<Vec<Finding>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
