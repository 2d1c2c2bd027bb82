use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::work_order::WorkOrderStatus;
use crate::model::entity::WorkOrder;
use crate::model::vo::{Page, WorkOrderFilter};

#[async_trait]
pub trait WorkOrderRepo: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<WorkOrder>>;

    async fn get_by_order_no(&self, work_order_no: &str) -> anyhow::Result<Option<WorkOrder>>;

    async fn insert(&self, entity: &WorkOrder) -> anyhow::Result<Uuid>;

    async fn find_page(&self, filter: &WorkOrderFilter) -> anyhow::Result<Page<WorkOrder>>;

    /// Persist the lifecycle fields of `entity` only while the stored status
    /// still equals `expected`.
    ///
    /// Returns `false` when zero rows matched, i.e. a concurrent transition
    /// changed the status first.
    async fn update_status_checked(
        &self,
        entity: &WorkOrder,
        expected: WorkOrderStatus,
    ) -> anyhow::Result<bool>;

    /// Set or clear the stored reference-document path. Returns `false` when
    /// the work order does not exist.
    async fn set_reference_document<'a>(
        &'a self,
        id: Uuid,
        path: Option<&'a str>,
    ) -> anyhow::Result<bool>;
}
