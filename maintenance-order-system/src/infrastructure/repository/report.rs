use std::collections::HashMap;

use chrono::NaiveTime;
use domain_reporting::model::ReportRange;
use domain_reporting::repository::{ActionWork, ReportQueryRepo};
use domain_work_order::model::entity::work_order::WorkOrderStatus;
use domain_work_order::model::entity::WorkOrder;
use num_traits::FromPrimitive;
use sea_orm::{prelude::*, Condition, QueryFilter};
use tracing::warn;

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl ReportQueryRepo for OrmRepo {
    async fn work_orders_for_progress(
        &self,
        range: &ReportRange,
    ) -> anyhow::Result<Vec<WorkOrder>> {
        let models = WorkOrderEntity::find()
            .filter(WorkOrderColumn::OrderDate.lte(range.to))
            .filter(
                Condition::any()
                    .add(WorkOrderColumn::WorkCompletedDate.is_null())
                    .add(WorkOrderColumn::WorkCompletedDate.gte(range.from)),
            )
            .all(self.con())
            .await?;
        let mut orders = Vec::with_capacity(models.len());
        for model in models {
            orders.push(model.try_into()?);
        }
        Ok(orders)
    }

    async fn action_work_between(&self, range: &ReportRange) -> anyhow::Result<Vec<ActionWork>> {
        let start = range.from.and_time(NaiveTime::MIN).and_utc();
        let end = range.to.succ_opt().map(|d| d.and_time(NaiveTime::MIN).and_utc());

        let mut query = ActionEntity::find().filter(ActionColumn::PerformedAt.gte(start));
        if let Some(end) = end {
            query = query.filter(ActionColumn::PerformedAt.lt(end));
        }
        let actions = query.all(self.con()).await?;
        if actions.is_empty() {
            return Ok(vec![]);
        }

        let action_ids: Vec<Uuid> = actions.iter().map(|a| a.id).collect();
        let links = JobPerformedByEntity::find()
            .filter(JobPerformedByColumn::ActionId.is_in(action_ids))
            .all(self.con())
            .await?;

        let technicians: HashMap<Uuid, TechnicianModel> = TechnicianEntity::find()
            .filter(
                TechnicianColumn::Id.is_in(links.iter().map(|l| l.technician_id).collect::<Vec<_>>()),
            )
            .all(self.con())
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        let statuses: HashMap<Uuid, WorkOrderStatus> = WorkOrderEntity::find()
            .filter(
                WorkOrderColumn::Id
                    .is_in(actions.iter().map(|a| a.work_order_id).collect::<Vec<_>>()),
            )
            .all(self.con())
            .await?
            .into_iter()
            .filter_map(|w| WorkOrderStatus::from_i32(w.status).map(|s| (w.id, s)))
            .collect();

        let actions: HashMap<Uuid, ActionModel> =
            actions.into_iter().map(|a| (a.id, a)).collect();

        let mut work = Vec::with_capacity(links.len());
        for link in links {
            let (Some(action), Some(technician)) =
                (actions.get(&link.action_id), technicians.get(&link.technician_id))
            else {
                warn!(action_id = %link.action_id, technician_id = %link.technician_id, "dangling assignment row skipped");
                continue;
            };
            let Some(work_order_status) = statuses.get(&action.work_order_id).copied() else {
                continue;
            };
            work.push(ActionWork {
                technician_id: technician.id,
                staff_no: technician.staff_no.clone(),
                technician_name: technician.name.clone(),
                action_id: action.id,
                performed_at: action.performed_at,
                duration_minutes: action.duration_minutes,
                work_order_status,
            });
        }
        Ok(work)
    }
}
