use async_trait::async_trait;
use domain_work_order::model::entity::WorkOrder;
use mockall::mock;

use crate::model::ReportRange;
use crate::repository::{ActionWork, ReportQueryRepo};

mock! {
    pub ReportQueryRepo {}
    #[async_trait]
    impl ReportQueryRepo for ReportQueryRepo {
        async fn work_orders_for_progress(
            &self,
            range: &ReportRange,
        ) -> anyhow::Result<Vec<WorkOrder>>;
        async fn action_work_between(&self, range: &ReportRange) -> anyhow::Result<Vec<ActionWork>>;
    }
}

pub mod prelude {
    pub use super::MockReportQueryRepo;
}
