use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::WorkOrderResult;
use crate::model::entity::Notification;

#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn list_for(&self, user_id: Uuid) -> WorkOrderResult<Vec<Notification>>;

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> WorkOrderResult<()>;
}
