use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Spare-part consumption recorded against a work order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePart {
    pub id: Uuid,
    pub work_order_id: Uuid,
    pub part_no: String,
    pub description: String,
    pub quantity: i32,
}
