use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::model::entity::work_order::WorkOrderStatus;
use crate::model::entity::{Action, Finding, Notification, SparePart, Technician, WorkOrder};
use crate::model::vo::{Page, WorkOrderFilter};
use crate::repository::{
    ActionRepo, FindingRepo, NotificationRepo, SparePartRepo, TechnicianRepo, WorkOrderRepo,
};
use crate::service::DocumentStore;

mock! {
    pub WorkOrderRepo {}
    #[async_trait]
    impl WorkOrderRepo for WorkOrderRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<WorkOrder>>;
        async fn get_by_order_no(&self, work_order_no: &str) -> anyhow::Result<Option<WorkOrder>>;
        async fn insert(&self, entity: &WorkOrder) -> anyhow::Result<Uuid>;
        async fn find_page(&self, filter: &WorkOrderFilter) -> anyhow::Result<Page<WorkOrder>>;
        async fn update_status_checked(
            &self,
            entity: &WorkOrder,
            expected: WorkOrderStatus,
        ) -> anyhow::Result<bool>;
        async fn set_reference_document<'a>(&'a self, id: Uuid, path: Option<&'a str>) -> anyhow::Result<bool>;
    }
}

mock! {
    pub FindingRepo {}
    #[async_trait]
    impl FindingRepo for FindingRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Finding>>;
        async fn insert(&self, entity: &Finding) -> anyhow::Result<Uuid>;
        async fn list_by_work_order(&self, work_order_id: Uuid) -> anyhow::Result<Vec<Finding>>;
        async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    }
}

mock! {
    pub ActionRepo {}
    #[async_trait]
    impl ActionRepo for ActionRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Action>>;
        async fn insert(&self, entity: &Action) -> anyhow::Result<Uuid>;
        async fn list_by_work_order(&self, work_order_id: Uuid) -> anyhow::Result<Vec<Action>>;
        async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    }
}

mock! {
    pub SparePartRepo {}
    #[async_trait]
    impl SparePartRepo for SparePartRepo {
        async fn insert(&self, entity: &SparePart) -> anyhow::Result<Uuid>;
        async fn list_by_work_order(&self, work_order_id: Uuid) -> anyhow::Result<Vec<SparePart>>;
        async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    }
}

mock! {
    pub TechnicianRepo {}
    #[async_trait]
    impl TechnicianRepo for TechnicianRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Technician>>;
        async fn list_by_work_order(&self, work_order_id: Uuid) -> anyhow::Result<Vec<Technician>>;
        async fn assign(&self, action_id: Uuid, technician_id: Uuid) -> anyhow::Result<()>;
        async fn unassign(&self, action_id: Uuid, technician_id: Uuid) -> anyhow::Result<bool>;
    }
}

mock! {
    pub NotificationRepo {}
    #[async_trait]
    impl NotificationRepo for NotificationRepo {
        async fn insert(&self, entity: &Notification) -> anyhow::Result<Uuid>;
        async fn list_by_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Notification>>;
        async fn mark_read(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool>;
    }
}

mock! {
    pub DocumentStore {}
    #[async_trait]
    impl DocumentStore for DocumentStore {
        async fn save(&self, path: &str, content: Vec<u8>) -> anyhow::Result<()>;
        async fn delete(&self, path: &str) -> anyhow::Result<()>;
    }
}

pub mod prelude {
    #[rustfmt::skip]
    pub use super::{
        MockActionRepo,
        MockDocumentStore,
        MockFindingRepo,
        MockNotificationRepo,
        MockSparePartRepo,
        MockTechnicianRepo,
        MockWorkOrderRepo,
    };
}
