use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::SparePart;

#[async_trait]
pub trait SparePartRepo: Send + Sync {
    async fn insert(&self, entity: &SparePart) -> anyhow::Result<Uuid>;

    async fn list_by_work_order(&self, work_order_id: Uuid) -> anyhow::Result<Vec<SparePart>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
