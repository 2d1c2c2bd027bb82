use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: Uuid,
    /// Staff number, unique across technicians.
    pub staff_no: String,
    pub name: String,
}
