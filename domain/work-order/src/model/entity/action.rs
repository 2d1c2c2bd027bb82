use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Corrective work carried out under a work order, optionally tied to the
/// finding it addresses. Technicians are linked through assignment rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: Uuid,
    pub work_order_id: Uuid,
    pub finding_id: Option<Uuid>,
    pub description: String,
    pub performed_at: DateTime<Utc>,
    pub duration_minutes: i32,
}
