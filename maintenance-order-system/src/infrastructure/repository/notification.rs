use domain_work_order::model::entity::Notification;
use domain_work_order::repository::NotificationRepo;
use sea_orm::sea_query::Expr;
use sea_orm::{prelude::*, QueryFilter, QueryOrder};

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl NotificationRepo for OrmRepo {
    async fn insert(&self, entity: &Notification) -> anyhow::Result<Uuid> {
        NotificationEntity::insert(NotificationModel::from(entity).into_set())
            .exec(self.con())
            .await?;
        Ok(entity.id)
    }

    async fn list_by_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Notification>> {
        let models = NotificationEntity::find()
            .filter(NotificationColumn::UserId.eq(user_id))
            .order_by_asc(NotificationColumn::IsRead)
            .order_by_desc(NotificationColumn::CreatedTime)
            .all(self.con())
            .await?;
        let mut notifications = Vec::with_capacity(models.len());
        for model in models {
            notifications.push(model.try_into()?);
        }
        Ok(notifications)
    }

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        let res = NotificationEntity::update_many()
            .col_expr(NotificationColumn::IsRead, Expr::value(true))
            .filter(NotificationColumn::Id.eq(id))
            .filter(NotificationColumn::UserId.eq(user_id))
            .exec(self.con())
            .await?;
        Ok(res.rows_affected == 1)
    }
}
