use std::sync::Arc;
use std::time::Duration;

use domain_reporting::service::{ProgressReportService, TechnicianReportService};
use domain_work_order::service::{
    NotificationService, ReferenceDocumentService, WorkOrderDetailService, WorkOrderService,
};
use sea_orm::{ConnectOptions, Database};
use service_reporting::{ProgressReportServiceImpl, TechnicianReportServiceImpl};
use service_work_order::{
    NotificationServiceImpl, ReferenceDocumentServiceImpl, WorkOrderDetailServiceImpl,
    WorkOrderServiceImpl,
};
use tracing::info;

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::database::OrmRepo;
use crate::infrastructure::storage::FsDocumentStore;

/// Wires repositories into services once at startup; handlers reach it
/// through `web::Data`.
pub struct ServiceProvider {
    pub work_order_service: Arc<dyn WorkOrderService>,
    pub detail_service: Arc<dyn WorkOrderDetailService>,
    pub document_service: Arc<dyn ReferenceDocumentService>,
    pub notification_service: Arc<dyn NotificationService>,
    pub progress_report_service: Arc<dyn ProgressReportService>,
    pub technician_report_service: Arc<dyn TechnicianReportService>,
}

impl ServiceProvider {
    pub async fn build(config: &AppConfig) -> anyhow::Result<Self> {
        let mut options = ConnectOptions::new(config.database.url.clone());
        options
            .max_connections(config.database.max_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);
        let db = Arc::new(Database::connect(options).await?);
        info!("Database connection established.");

        let repo = Arc::new(OrmRepo::builder().db(db).build());
        let store = Arc::new(FsDocumentStore::new(&config.document_storage.root)?);

        Ok(Self {
            work_order_service: Arc::new(
                WorkOrderServiceImpl::builder()
                    .work_order_repo(repo.clone())
                    .notification_repo(repo.clone())
                    .build(),
            ),
            detail_service: Arc::new(
                WorkOrderDetailServiceImpl::builder()
                    .work_order_repo(repo.clone())
                    .finding_repo(repo.clone())
                    .action_repo(repo.clone())
                    .spare_part_repo(repo.clone())
                    .technician_repo(repo.clone())
                    .build(),
            ),
            document_service: Arc::new(
                ReferenceDocumentServiceImpl::builder()
                    .work_order_repo(repo.clone())
                    .store(store)
                    .max_size(config.document_storage.max_size)
                    .build(),
            ),
            notification_service: Arc::new(
                NotificationServiceImpl::builder().notification_repo(repo.clone()).build(),
            ),
            progress_report_service: Arc::new(
                ProgressReportServiceImpl::builder().report_repo(repo.clone()).build(),
            ),
            technician_report_service: Arc::new(
                TechnicianReportServiceImpl::builder().report_repo(repo).build(),
            ),
        })
    }
}
