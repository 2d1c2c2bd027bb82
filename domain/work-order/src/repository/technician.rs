use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Technician;

#[async_trait]
pub trait TechnicianRepo: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Technician>>;

    /// Technicians that performed any action of the given work order.
    async fn list_by_work_order(&self, work_order_id: Uuid) -> anyhow::Result<Vec<Technician>>;

    /// Link a technician to an action. Inserting an existing link is a no-op.
    async fn assign(&self, action_id: Uuid, technician_id: Uuid) -> anyhow::Result<()>;

    async fn unassign(&self, action_id: Uuid, technician_id: Uuid) -> anyhow::Result<bool>;
}
