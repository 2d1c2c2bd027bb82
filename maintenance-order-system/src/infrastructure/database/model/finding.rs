use domain_work_order::model::entity::Finding;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "findings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub work_order_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub detected_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Finding {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            work_order_id: model.work_order_id,
            description: model.description,
            detected_at: model.detected_at,
        }
    }
}

impl From<&Finding> for Model {
    fn from(entity: &Finding) -> Self {
        Self {
            id: entity.id,
            work_order_id: entity.work_order_id,
            description: entity.description.clone(),
            detected_at: entity.detected_at,
        }
    }
}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            work_order_id: Set(self.work_order_id),
            description: Set(self.description),
            detected_at: Set(self.detected_at),
        }
    }
}
