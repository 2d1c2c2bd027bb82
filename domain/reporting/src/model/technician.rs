use serde::Serialize;
use uuid::Uuid;

use crate::model::progress::ReportRange;

#[derive(Debug, Clone, Serialize)]
pub struct TechnicianPerformanceReport {
    pub range: ReportRange,
    pub rows: Vec<TechnicianRow>,
}

/// Per-technician aggregates over the actions they were assigned to within
/// the report range.
#[derive(Debug, Clone, Serialize)]
pub struct TechnicianRow {
    pub technician_id: Uuid,
    pub staff_no: String,
    pub name: String,
    pub actions_worked: u64,
    /// Actions whose work order is completed at report time.
    pub actions_completed: u64,
    pub total_minutes: i64,
}
