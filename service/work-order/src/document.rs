use std::sync::Arc;

use async_trait::async_trait;
use domain_work_order::exception::{WorkOrderException, WorkOrderResult};
use domain_work_order::model::entity::WorkOrder;
use domain_work_order::repository::WorkOrderRepo;
use domain_work_order::service::{DocumentStore, ReferenceDocumentService};
use tracing::warn;
use typed_builder::TypedBuilder;
use uuid::Uuid;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "xlsx", "doc", "docx"];

#[derive(TypedBuilder)]
pub struct ReferenceDocumentServiceImpl {
    work_order_repo: Arc<dyn WorkOrderRepo>,
    store: Arc<dyn DocumentStore>,
    /// Upload size cap in bytes.
    #[builder(default = 20 * 1024 * 1024)]
    max_size: usize,
}

#[async_trait]
impl ReferenceDocumentService for ReferenceDocumentServiceImpl {
    async fn upload(
        &self,
        work_order_id: Uuid,
        file_name: &str,
        content: Vec<u8>,
    ) -> WorkOrderResult<WorkOrder> {
        if content.is_empty() {
            return Err(WorkOrderException::validation("uploaded file is empty"));
        }
        if content.len() > self.max_size {
            return Err(WorkOrderException::validation(format!(
                "uploaded file exceeds the {} byte limit",
                self.max_size
            )));
        }
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .filter(|e| ALLOWED_EXTENSIONS.contains(&e.as_str()))
            .ok_or_else(|| {
                WorkOrderException::validation(format!(
                    "unsupported reference document type: {file_name}"
                ))
            })?;

        let mut order = self.fetch(work_order_id).await?;
        let superseded = order.reference_document.take();
        let path = format!("work-orders/{work_order_id}/{}.{extension}", Uuid::new_v4());

        // File first, row second; a failed row update leaves an orphaned
        // file, which is a housekeeping issue rather than a consistency one.
        self.store.save(&path, content).await?;
        if !self
            .work_order_repo
            .set_reference_document(work_order_id, Some(&path))
            .await?
        {
            return Err(WorkOrderException::NotFound {
                entity: "work order",
                id: work_order_id,
            });
        }
        order.reference_document = Some(path);

        if let Some(superseded) = superseded {
            if let Err(e) = self.store.delete(&superseded).await {
                warn!(%work_order_id, path = %superseded, error = %e, "failed to delete superseded reference document");
            }
        }
        Ok(order)
    }

    async fn remove(&self, work_order_id: Uuid) -> WorkOrderResult<WorkOrder> {
        let mut order = self.fetch(work_order_id).await?;
        let Some(path) = order.reference_document.take() else {
            return Ok(order);
        };

        if !self.work_order_repo.set_reference_document(work_order_id, None).await? {
            return Err(WorkOrderException::NotFound {
                entity: "work order",
                id: work_order_id,
            });
        }
        if let Err(e) = self.store.delete(&path).await {
            warn!(%work_order_id, %path, error = %e, "failed to delete removed reference document");
        }
        Ok(order)
    }
}

impl ReferenceDocumentServiceImpl {
    async fn fetch(&self, id: Uuid) -> WorkOrderResult<WorkOrder> {
        self.work_order_repo.get_by_id(id).await?.ok_or(WorkOrderException::NotFound {
            entity: "work order",
            id,
        })
    }
}
