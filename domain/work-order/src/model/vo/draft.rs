use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::exception::{WorkOrderException, WorkOrderResult};

/// Client-supplied fields for a new work order. The requester, status, and
/// allocation timestamp are assigned by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderDraft {
    pub work_order_no: String,
    pub order_date: NaiveDate,
    pub equipment_id: String,
    pub usage_count: Option<i64>,
    pub description: String,
    pub work_type: String,
}

impl WorkOrderDraft {
    pub fn validate(&self) -> WorkOrderResult<()> {
        if self.work_order_no.trim().is_empty() {
            return Err(WorkOrderException::validation("work order number is required"));
        }
        if self.equipment_id.trim().is_empty() {
            return Err(WorkOrderException::validation("equipment id is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingDraft {
    pub description: String,
    pub detected_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDraft {
    pub finding_id: Option<Uuid>,
    pub description: String,
    pub performed_at: Option<DateTime<Utc>>,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePartDraft {
    pub part_no: String,
    pub description: String,
    pub quantity: i32,
}
