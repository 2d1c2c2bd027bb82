use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Notification;

#[async_trait]
pub trait NotificationRepo: Send + Sync {
    async fn insert(&self, entity: &Notification) -> anyhow::Result<Uuid>;

    /// A user's notifications, unread first, newest within each group.
    async fn list_by_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Notification>>;

    /// Returns `false` when the notification does not exist or belongs to
    /// another user.
    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool>;
}
