use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_work_order::model::entity::work_order::WorkOrderStatus;
use domain_work_order::model::entity::WorkOrder;
use uuid::Uuid;

use crate::model::ReportRange;

/// One technician's share of one action, joined for reporting.
#[derive(Debug, Clone)]
pub struct ActionWork {
    pub technician_id: Uuid,
    pub staff_no: String,
    pub technician_name: String,
    pub action_id: Uuid,
    pub performed_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub work_order_status: WorkOrderStatus,
}

/// Read-only queries backing report generation.
#[async_trait]
pub trait ReportQueryRepo: Send + Sync {
    /// Work orders ordered on or before the range end and not completed
    /// before its start.
    async fn work_orders_for_progress(
        &self,
        range: &ReportRange,
    ) -> anyhow::Result<Vec<WorkOrder>>;

    /// Technician assignment rows for actions performed within the range.
    async fn action_work_between(&self, range: &ReportRange) -> anyhow::Result<Vec<ActionWork>>;
}
