use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::WorkOrderResult;
use crate::model::entity::WorkOrder;
use crate::model::vo::{Actor, Page, Transition, WorkOrderDraft, WorkOrderFilter};

/// Creation, lookup, and lifecycle transitions of work orders.
#[async_trait]
pub trait WorkOrderService: Send + Sync {
    /// Create a new work order in `Pending`, requested by `actor`.
    async fn create(&self, draft: WorkOrderDraft, actor: Actor) -> WorkOrderResult<WorkOrder>;

    async fn get(&self, id: Uuid) -> WorkOrderResult<WorkOrder>;

    async fn list(&self, filter: WorkOrderFilter) -> WorkOrderResult<Page<WorkOrder>>;

    /// Apply a lifecycle transition and return the updated record.
    ///
    /// Racing transitions on the same order are serialized by the store's
    /// current-status predicate; the loser gets `InvalidTransition`.
    async fn transit(
        &self,
        id: Uuid,
        actor: Actor,
        transition: Transition,
    ) -> WorkOrderResult<WorkOrder>;
}
