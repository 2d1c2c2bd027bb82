use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_work_order::exception::{WorkOrderException, WorkOrderResult};
use domain_work_order::model::entity::{Action, Finding, SparePart, Technician};
use domain_work_order::model::vo::{ActionDraft, FindingDraft, SparePartDraft};
use domain_work_order::repository::{
    ActionRepo, FindingRepo, SparePartRepo, TechnicianRepo, WorkOrderRepo,
};
use domain_work_order::service::WorkOrderDetailService;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct WorkOrderDetailServiceImpl {
    work_order_repo: Arc<dyn WorkOrderRepo>,
    finding_repo: Arc<dyn FindingRepo>,
    action_repo: Arc<dyn ActionRepo>,
    spare_part_repo: Arc<dyn SparePartRepo>,
    technician_repo: Arc<dyn TechnicianRepo>,
}

impl WorkOrderDetailServiceImpl {
    async fn ensure_work_order(&self, id: Uuid) -> WorkOrderResult<()> {
        if self.work_order_repo.get_by_id(id).await?.is_none() {
            return Err(WorkOrderException::NotFound {
                entity: "work order",
                id,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl WorkOrderDetailService for WorkOrderDetailServiceImpl {
    async fn add_finding(
        &self,
        work_order_id: Uuid,
        draft: FindingDraft,
    ) -> WorkOrderResult<Finding> {
        if draft.description.trim().is_empty() {
            return Err(WorkOrderException::validation("finding description is required"));
        }
        self.ensure_work_order(work_order_id).await?;
        let finding = Finding {
            id: Uuid::new_v4(),
            work_order_id,
            description: draft.description,
            detected_at: draft.detected_at.unwrap_or_else(Utc::now),
        };
        self.finding_repo.insert(&finding).await?;
        Ok(finding)
    }

    async fn findings(&self, work_order_id: Uuid) -> WorkOrderResult<Vec<Finding>> {
        self.ensure_work_order(work_order_id).await?;
        Ok(self.finding_repo.list_by_work_order(work_order_id).await?)
    }

    async fn remove_finding(&self, finding_id: Uuid) -> WorkOrderResult<()> {
        if !self.finding_repo.delete(finding_id).await? {
            return Err(WorkOrderException::NotFound {
                entity: "finding",
                id: finding_id,
            });
        }
        Ok(())
    }

    async fn add_action(
        &self,
        work_order_id: Uuid,
        draft: ActionDraft,
    ) -> WorkOrderResult<Action> {
        if draft.description.trim().is_empty() {
            return Err(WorkOrderException::validation("action description is required"));
        }
        if draft.duration_minutes < 0 {
            return Err(WorkOrderException::validation("action duration cannot be negative"));
        }
        self.ensure_work_order(work_order_id).await?;
        if let Some(finding_id) = draft.finding_id {
            if self.finding_repo.get_by_id(finding_id).await?.is_none() {
                return Err(WorkOrderException::NotFound {
                    entity: "finding",
                    id: finding_id,
                });
            }
        }
        let action = Action {
            id: Uuid::new_v4(),
            work_order_id,
            finding_id: draft.finding_id,
            description: draft.description,
            performed_at: draft.performed_at.unwrap_or_else(Utc::now),
            duration_minutes: draft.duration_minutes,
        };
        self.action_repo.insert(&action).await?;
        Ok(action)
    }

    async fn actions(&self, work_order_id: Uuid) -> WorkOrderResult<Vec<Action>> {
        self.ensure_work_order(work_order_id).await?;
        Ok(self.action_repo.list_by_work_order(work_order_id).await?)
    }

    async fn remove_action(&self, action_id: Uuid) -> WorkOrderResult<()> {
        if !self.action_repo.delete(action_id).await? {
            return Err(WorkOrderException::NotFound {
                entity: "action",
                id: action_id,
            });
        }
        Ok(())
    }

    async fn add_spare_part(
        &self,
        work_order_id: Uuid,
        draft: SparePartDraft,
    ) -> WorkOrderResult<SparePart> {
        if draft.part_no.trim().is_empty() {
            return Err(WorkOrderException::validation("part number is required"));
        }
        if draft.quantity <= 0 {
            return Err(WorkOrderException::validation("quantity must be positive"));
        }
        self.ensure_work_order(work_order_id).await?;
        let part = SparePart {
            id: Uuid::new_v4(),
            work_order_id,
            part_no: draft.part_no,
            description: draft.description,
            quantity: draft.quantity,
        };
        self.spare_part_repo.insert(&part).await?;
        Ok(part)
    }

    async fn spare_parts(&self, work_order_id: Uuid) -> WorkOrderResult<Vec<SparePart>> {
        self.ensure_work_order(work_order_id).await?;
        Ok(self.spare_part_repo.list_by_work_order(work_order_id).await?)
    }

    async fn remove_spare_part(&self, spare_part_id: Uuid) -> WorkOrderResult<()> {
        if !self.spare_part_repo.delete(spare_part_id).await? {
            return Err(WorkOrderException::NotFound {
                entity: "spare part",
                id: spare_part_id,
            });
        }
        Ok(())
    }

    async fn assign_technician(
        &self,
        action_id: Uuid,
        technician_id: Uuid,
    ) -> WorkOrderResult<()> {
        if self.action_repo.get_by_id(action_id).await?.is_none() {
            return Err(WorkOrderException::NotFound {
                entity: "action",
                id: action_id,
            });
        }
        if self.technician_repo.get_by_id(technician_id).await?.is_none() {
            return Err(WorkOrderException::NotFound {
                entity: "technician",
                id: technician_id,
            });
        }
        Ok(self.technician_repo.assign(action_id, technician_id).await?)
    }

    async fn unassign_technician(
        &self,
        action_id: Uuid,
        technician_id: Uuid,
    ) -> WorkOrderResult<()> {
        if !self.technician_repo.unassign(action_id, technician_id).await? {
            return Err(WorkOrderException::NotFound {
                entity: "technician assignment",
                id: action_id,
            });
        }
        Ok(())
    }

    async fn technicians(&self, work_order_id: Uuid) -> WorkOrderResult<Vec<Technician>> {
        self.ensure_work_order(work_order_id).await?;
        Ok(self.technician_repo.list_by_work_order(work_order_id).await?)
    }
}
