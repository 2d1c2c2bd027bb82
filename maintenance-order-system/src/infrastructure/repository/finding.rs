use domain_work_order::model::entity::Finding;
use domain_work_order::repository::FindingRepo;
use sea_orm::{prelude::*, QueryFilter, QueryOrder};

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl FindingRepo for OrmRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Finding>> {
        Ok(FindingEntity::find_by_id(id).one(self.con()).await?.map(Finding::from))
    }

    async fn insert(&self, entity: &Finding) -> anyhow::Result<Uuid> {
        FindingEntity::insert(FindingModel::from(entity).into_set()).exec(self.con()).await?;
        Ok(entity.id)
    }

    async fn list_by_work_order(&self, work_order_id: Uuid) -> anyhow::Result<Vec<Finding>> {
        Ok(FindingEntity::find()
            .filter(FindingColumn::WorkOrderId.eq(work_order_id))
            .order_by_asc(FindingColumn::DetectedAt)
            .all(self.con())
            .await?
            .into_iter()
            .map(Finding::from)
            .collect())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = FindingEntity::delete_by_id(id).exec(self.con()).await?;
        Ok(res.rows_affected == 1)
    }
}
