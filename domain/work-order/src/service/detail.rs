use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::WorkOrderResult;
use crate::model::entity::{Action, Finding, SparePart, Technician};
use crate::model::vo::{ActionDraft, FindingDraft, SparePartDraft};

/// Child records of a work order: findings, actions, spare parts, and
/// technician assignments. Plain create/list/delete, no lifecycle rules.
#[async_trait]
pub trait WorkOrderDetailService: Send + Sync {
    async fn add_finding(
        &self,
        work_order_id: Uuid,
        draft: FindingDraft,
    ) -> WorkOrderResult<Finding>;

    async fn findings(&self, work_order_id: Uuid) -> WorkOrderResult<Vec<Finding>>;

    async fn remove_finding(&self, finding_id: Uuid) -> WorkOrderResult<()>;

    async fn add_action(&self, work_order_id: Uuid, draft: ActionDraft)
        -> WorkOrderResult<Action>;

    async fn actions(&self, work_order_id: Uuid) -> WorkOrderResult<Vec<Action>>;

    async fn remove_action(&self, action_id: Uuid) -> WorkOrderResult<()>;

    async fn add_spare_part(
        &self,
        work_order_id: Uuid,
        draft: SparePartDraft,
    ) -> WorkOrderResult<SparePart>;

    async fn spare_parts(&self, work_order_id: Uuid) -> WorkOrderResult<Vec<SparePart>>;

    async fn remove_spare_part(&self, spare_part_id: Uuid) -> WorkOrderResult<()>;

    async fn assign_technician(&self, action_id: Uuid, technician_id: Uuid)
        -> WorkOrderResult<()>;

    async fn unassign_technician(
        &self,
        action_id: Uuid,
        technician_id: Uuid,
    ) -> WorkOrderResult<()>;

    async fn technicians(&self, work_order_id: Uuid) -> WorkOrderResult<Vec<Technician>>;
}
