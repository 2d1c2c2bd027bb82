use domain_work_order::model::entity::Action;
use domain_work_order::repository::ActionRepo;
use sea_orm::{prelude::*, QueryFilter, QueryOrder, TransactionTrait};

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl ActionRepo for OrmRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Action>> {
        Ok(ActionEntity::find_by_id(id).one(self.con()).await?.map(Action::from))
    }

    async fn insert(&self, entity: &Action) -> anyhow::Result<Uuid> {
        ActionEntity::insert(ActionModel::from(entity).into_set()).exec(self.con()).await?;
        Ok(entity.id)
    }

    async fn list_by_work_order(&self, work_order_id: Uuid) -> anyhow::Result<Vec<Action>> {
        Ok(ActionEntity::find()
            .filter(ActionColumn::WorkOrderId.eq(work_order_id))
            .order_by_asc(ActionColumn::PerformedAt)
            .all(self.con())
            .await?
            .into_iter()
            .map(Action::from)
            .collect())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let txn = self.con().begin().await?;
        JobPerformedByEntity::delete_many()
            .filter(JobPerformedByColumn::ActionId.eq(id))
            .exec(&txn)
            .await?;
        let res = ActionEntity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected == 1)
    }
}
