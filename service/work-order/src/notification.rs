use std::sync::Arc;

use async_trait::async_trait;
use domain_work_order::exception::{WorkOrderException, WorkOrderResult};
use domain_work_order::model::entity::Notification;
use domain_work_order::repository::NotificationRepo;
use domain_work_order::service::NotificationService;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct NotificationServiceImpl {
    notification_repo: Arc<dyn NotificationRepo>,
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn list_for(&self, user_id: Uuid) -> WorkOrderResult<Vec<Notification>> {
        Ok(self.notification_repo.list_by_user(user_id).await?)
    }

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> WorkOrderResult<()> {
        if !self.notification_repo.mark_read(id, user_id).await? {
            return Err(WorkOrderException::NotFound {
                entity: "notification",
                id,
            });
        }
        Ok(())
    }
}
