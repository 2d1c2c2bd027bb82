use std::collections::HashSet;

use domain_work_order::model::entity::Technician;
use domain_work_order::repository::TechnicianRepo;
use sea_orm::sea_query::OnConflict;
use sea_orm::{prelude::*, DbErr, QueryFilter, QueryOrder, Set};

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl TechnicianRepo for OrmRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Technician>> {
        Ok(TechnicianEntity::find_by_id(id).one(self.con()).await?.map(Technician::from))
    }

    async fn list_by_work_order(&self, work_order_id: Uuid) -> anyhow::Result<Vec<Technician>> {
        let action_ids: Vec<Uuid> = ActionEntity::find()
            .filter(ActionColumn::WorkOrderId.eq(work_order_id))
            .all(self.con())
            .await?
            .into_iter()
            .map(|a| a.id)
            .collect();
        if action_ids.is_empty() {
            return Ok(vec![]);
        }

        let technician_ids: HashSet<Uuid> = JobPerformedByEntity::find()
            .filter(JobPerformedByColumn::ActionId.is_in(action_ids))
            .all(self.con())
            .await?
            .into_iter()
            .map(|link| link.technician_id)
            .collect();
        if technician_ids.is_empty() {
            return Ok(vec![]);
        }

        Ok(TechnicianEntity::find()
            .filter(TechnicianColumn::Id.is_in(technician_ids))
            .order_by_asc(TechnicianColumn::StaffNo)
            .all(self.con())
            .await?
            .into_iter()
            .map(Technician::from)
            .collect())
    }

    async fn assign(&self, action_id: Uuid, technician_id: Uuid) -> anyhow::Result<()> {
        let res = JobPerformedByEntity::insert(JobPerformedByActiveModel {
            action_id: Set(action_id),
            technician_id: Set(technician_id),
        })
        .on_conflict(
            OnConflict::columns([
                JobPerformedByColumn::ActionId,
                JobPerformedByColumn::TechnicianId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec(self.con())
        .await;
        match res {
            // An existing link is fine; the do-nothing conflict path surfaces
            // as RecordNotInserted.
            Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn unassign(&self, action_id: Uuid, technician_id: Uuid) -> anyhow::Result<bool> {
        let res = JobPerformedByEntity::delete_many()
            .filter(JobPerformedByColumn::ActionId.eq(action_id))
            .filter(JobPerformedByColumn::TechnicianId.eq(technician_id))
            .exec(self.con())
            .await?;
        Ok(res.rows_affected == 1)
    }
}
