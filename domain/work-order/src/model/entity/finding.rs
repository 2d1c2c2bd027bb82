use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A defect or observation recorded against a work order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: Uuid,
    pub work_order_id: Uuid,
    pub description: String,
    pub detected_at: DateTime<Utc>,
}
