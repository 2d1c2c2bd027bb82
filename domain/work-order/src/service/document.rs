use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::WorkOrderResult;
use crate::model::entity::WorkOrder;

/// Upload, replacement, and removal of a work order's reference document.
#[async_trait]
pub trait ReferenceDocumentService: Send + Sync {
    /// Store the file, then point the work order at it. A superseded file is
    /// deleted best-effort afterwards.
    async fn upload(
        &self,
        work_order_id: Uuid,
        file_name: &str,
        content: Vec<u8>,
    ) -> WorkOrderResult<WorkOrder>;

    async fn remove(&self, work_order_id: Uuid) -> WorkOrderResult<WorkOrder>;
}

/// Durable blob storage for reference documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn save(&self, path: &str, content: Vec<u8>) -> anyhow::Result<()>;

    async fn delete(&self, path: &str) -> anyhow::Result<()>;
}
