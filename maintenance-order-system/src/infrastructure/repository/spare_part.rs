use domain_work_order::model::entity::SparePart;
use domain_work_order::repository::SparePartRepo;
use sea_orm::{prelude::*, QueryFilter, QueryOrder};

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl SparePartRepo for OrmRepo {
    async fn insert(&self, entity: &SparePart) -> anyhow::Result<Uuid> {
        SparePartEntity::insert(SparePartModel::from(entity).into_set()).exec(self.con()).await?;
        Ok(entity.id)
    }

    async fn list_by_work_order(&self, work_order_id: Uuid) -> anyhow::Result<Vec<SparePart>> {
        Ok(SparePartEntity::find()
            .filter(SparePartColumn::WorkOrderId.eq(work_order_id))
            .order_by_asc(SparePartColumn::PartNo)
            .all(self.con())
            .await?
            .into_iter()
            .map(SparePart::from)
            .collect())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = SparePartEntity::delete_by_id(id).exec(self.con()).await?;
        Ok(res.rows_affected == 1)
    }
}
