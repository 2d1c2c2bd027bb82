use actix_easy_multipart::tempfile::Tempfile;
use actix_easy_multipart::MultipartForm;
use chrono::{DateTime, NaiveDate, Utc};
use domain_work_order::model::entity::{Notification, WorkOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderDto {
    pub id: Uuid,
    pub work_order_no: String,
    pub order_date: NaiveDate,
    pub equipment_id: String,
    pub usage_count: Option<i64>,
    pub description: String,
    pub requested_by: Uuid,
    pub work_type: String,
    pub allocated_at: DateTime<Utc>,
    pub work_completed_date: Option<NaiveDate>,
    pub status: String,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub completion_requested_by: Option<Uuid>,
    pub completion_requested_at: Option<DateTime<Utc>>,
    pub completion_approved_by: Option<Uuid>,
    pub completion_approved_at: Option<DateTime<Utc>>,
    pub completion_rejection_reason: Option<String>,
    pub reference_document: Option<String>,
}

impl From<WorkOrder> for WorkOrderDto {
    fn from(order: WorkOrder) -> Self {
        Self {
            id: order.id,
            work_order_no: order.work_order_no,
            order_date: order.order_date,
            equipment_id: order.equipment_id,
            usage_count: order.usage_count,
            description: order.description,
            requested_by: order.requested_by,
            work_type: order.work_type,
            allocated_at: order.allocated_at,
            work_completed_date: order.work_completed_date,
            status: order.status.to_string(),
            approved_by: order.approved_by,
            approved_at: order.approved_at,
            rejection_reason: order.rejection_reason,
            completion_requested_by: order.completion_requested_by,
            completion_requested_at: order.completion_requested_at,
            completion_approved_by: order.completion_approved_by,
            completion_approved_at: order.completion_approved_at,
            completion_rejection_reason: order.completion_rejection_reason,
            reference_document: order.reference_document,
        }
    }
}

#[derive(Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

#[derive(Deserialize)]
pub struct ReportQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Json,
    #[default]
    Xlsx,
}

#[derive(MultipartForm)]
pub struct UploadReferenceDocumentRequest {
    pub file: Tempfile,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: Uuid,
    pub kind: String,
    pub title: String,
    pub content: String,
    pub work_order_id: Uuid,
    pub is_read: bool,
    pub created_time: DateTime<Utc>,
}

impl From<Notification> for NotificationDto {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            kind: format!("{:?}", n.kind),
            title: n.title,
            content: n.content,
            work_order_id: n.work_order_id,
            is_read: n.is_read,
            created_time: n.created_time,
        }
    }
}
