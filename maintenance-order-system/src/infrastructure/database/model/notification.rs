use anyhow::anyhow;
use domain_work_order::model::entity::{Notification, NotificationKind};
use num_traits::FromPrimitive;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub work_order_id: Uuid,
    pub is_read: bool,
    pub created_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Notification {
    type Error = anyhow::Error;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            kind: NotificationKind::from_i32(model.kind)
                .ok_or(anyhow!("Wrong notification kind: {}", model.kind))?,
            title: model.title,
            content: model.content,
            work_order_id: model.work_order_id,
            is_read: model.is_read,
            created_time: model.created_time,
        })
    }
}

impl From<&Notification> for Model {
    fn from(entity: &Notification) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind as i32,
            title: entity.title.clone(),
            content: entity.content.clone(),
            work_order_id: entity.work_order_id,
            is_read: entity.is_read,
            created_time: entity.created_time,
        }
    }
}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            user_id: Set(self.user_id),
            kind: Set(self.kind),
            title: Set(self.title),
            content: Set(self.content),
            work_order_id: Set(self.work_order_id),
            is_read: Set(self.is_read),
            created_time: Set(self.created_time),
        }
    }
}
