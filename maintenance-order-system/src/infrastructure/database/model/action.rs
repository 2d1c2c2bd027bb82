use domain_work_order::model::entity::Action;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "actions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub work_order_id: Uuid,
    pub finding_id: Option<Uuid>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub performed_at: DateTimeUtc,
    pub duration_minutes: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Action {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            work_order_id: model.work_order_id,
            finding_id: model.finding_id,
            description: model.description,
            performed_at: model.performed_at,
            duration_minutes: model.duration_minutes,
        }
    }
}

impl From<&Action> for Model {
    fn from(entity: &Action) -> Self {
        Self {
            id: entity.id,
            work_order_id: entity.work_order_id,
            finding_id: entity.finding_id,
            description: entity.description.clone(),
            performed_at: entity.performed_at,
            duration_minutes: entity.duration_minutes,
        }
    }
}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            work_order_id: Set(self.work_order_id),
            finding_id: Set(self.finding_id),
            description: Set(self.description),
            performed_at: Set(self.performed_at),
            duration_minutes: Set(self.duration_minutes),
        }
    }
}
