use domain_work_order::model::entity::SparePart;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "spare_parts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub work_order_id: Uuid,
    pub part_no: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SparePart {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            work_order_id: model.work_order_id,
            part_no: model.part_no,
            description: model.description,
            quantity: model.quantity,
        }
    }
}

impl From<&SparePart> for Model {
    fn from(entity: &SparePart) -> Self {
        Self {
            id: entity.id,
            work_order_id: entity.work_order_id,
            part_no: entity.part_no.clone(),
            description: entity.description.clone(),
            quantity: entity.quantity,
        }
    }
}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            work_order_id: Set(self.work_order_id),
            part_no: Set(self.part_no),
            description: Set(self.description),
            quantity: Set(self.quantity),
        }
    }
}
