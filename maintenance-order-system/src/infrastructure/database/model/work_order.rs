use anyhow::anyhow;
use domain_work_order::model::entity::work_order::{WorkOrder, WorkOrderStatus};
use num_traits::FromPrimitive;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "work_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub work_order_no: String,
    pub order_date: Date,
    pub equipment_id: String,
    pub usage_count: Option<i64>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub requested_by: Uuid,
    pub work_type: String,
    pub allocated_at: DateTimeUtc,
    pub work_completed_date: Option<Date>,
    pub status: i32,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTimeUtc>,
    pub rejection_reason: Option<String>,
    pub completion_requested_by: Option<Uuid>,
    pub completion_requested_at: Option<DateTimeUtc>,
    pub completion_approved_by: Option<Uuid>,
    pub completion_approved_at: Option<DateTimeUtc>,
    pub completion_rejection_reason: Option<String>,
    pub reference_document: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for WorkOrder {
    type Error = anyhow::Error;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            work_order_no: model.work_order_no,
            order_date: model.order_date,
            equipment_id: model.equipment_id,
            usage_count: model.usage_count,
            description: model.description,
            requested_by: model.requested_by,
            work_type: model.work_type,
            allocated_at: model.allocated_at,
            work_completed_date: model.work_completed_date,
            status: WorkOrderStatus::from_i32(model.status)
                .ok_or(anyhow!("Wrong work order status: {}", model.status))?,
            approved_by: model.approved_by,
            approved_at: model.approved_at,
            rejection_reason: model.rejection_reason,
            completion_requested_by: model.completion_requested_by,
            completion_requested_at: model.completion_requested_at,
            completion_approved_by: model.completion_approved_by,
            completion_approved_at: model.completion_approved_at,
            completion_rejection_reason: model.completion_rejection_reason,
            reference_document: model.reference_document,
        })
    }
}

impl From<&WorkOrder> for Model {
    fn from(entity: &WorkOrder) -> Self {
        Self {
            id: entity.id,
            work_order_no: entity.work_order_no.clone(),
            order_date: entity.order_date,
            equipment_id: entity.equipment_id.clone(),
            usage_count: entity.usage_count,
            description: entity.description.clone(),
            requested_by: entity.requested_by,
            work_type: entity.work_type.clone(),
            allocated_at: entity.allocated_at,
            work_completed_date: entity.work_completed_date,
            status: entity.status as i32,
            approved_by: entity.approved_by,
            approved_at: entity.approved_at,
            rejection_reason: entity.rejection_reason.clone(),
            completion_requested_by: entity.completion_requested_by,
            completion_requested_at: entity.completion_requested_at,
            completion_approved_by: entity.completion_approved_by,
            completion_approved_at: entity.completion_approved_at,
            completion_rejection_reason: entity.completion_rejection_reason.clone(),
            reference_document: entity.reference_document.clone(),
        }
    }
}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            work_order_no: Set(self.work_order_no),
            order_date: Set(self.order_date),
            equipment_id: Set(self.equipment_id),
            usage_count: Set(self.usage_count),
            description: Set(self.description),
            requested_by: Set(self.requested_by),
            work_type: Set(self.work_type),
            allocated_at: Set(self.allocated_at),
            work_completed_date: Set(self.work_completed_date),
            status: Set(self.status),
            approved_by: Set(self.approved_by),
            approved_at: Set(self.approved_at),
            rejection_reason: Set(self.rejection_reason),
            completion_requested_by: Set(self.completion_requested_by),
            completion_requested_at: Set(self.completion_requested_at),
            completion_approved_by: Set(self.completion_approved_by),
            completion_approved_at: Set(self.completion_approved_at),
            completion_rejection_reason: Set(self.completion_rejection_reason),
            reference_document: Set(self.reference_document),
        }
    }
}
