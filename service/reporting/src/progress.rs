use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use domain_reporting::exception::ReportResult;
use domain_reporting::model::{
    categorize, ProgressClass, ProgressReport, ProgressRow, ReportBucket, ReportRange,
};
use domain_reporting::repository::ReportQueryRepo;
use domain_reporting::service::ProgressReportService;
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::xlsx;

#[derive(TypedBuilder)]
pub struct ProgressReportServiceImpl {
    report_repo: Arc<dyn ReportQueryRepo>,
}

#[async_trait]
impl ProgressReportService for ProgressReportServiceImpl {
    async fn build(&self, range: ReportRange) -> ReportResult<ProgressReport> {
        let orders = self.report_repo.work_orders_for_progress(&range).await?;
        debug!(count = orders.len(), "building progress report");

        let mut by_bucket: HashMap<ReportBucket, ProgressRow> = HashMap::new();
        for order in &orders {
            let bucket = categorize(&order.work_type);
            let row = by_bucket.entry(bucket).or_insert_with(|| ProgressRow {
                bucket,
                ongoing_count: 0,
                completed_count: 0,
                ongoing_orders: Vec::new(),
                completed_orders: Vec::new(),
            });
            match ProgressClass::of(order, range.to) {
                ProgressClass::Completed => {
                    row.completed_count += 1;
                    row.completed_orders.push(order.work_order_no.clone());
                }
                ProgressClass::Ongoing => {
                    row.ongoing_count += 1;
                    row.ongoing_orders.push(order.work_order_no.clone());
                }
            }
        }

        // Always seven rows, in fixed bucket order.
        let rows = ReportBucket::ALL
            .into_iter()
            .map(|bucket| {
                by_bucket.remove(&bucket).unwrap_or(ProgressRow {
                    bucket,
                    ongoing_count: 0,
                    completed_count: 0,
                    ongoing_orders: Vec::new(),
                    completed_orders: Vec::new(),
                })
            })
            .collect();
        Ok(ProgressReport { range, rows })
    }

    async fn render_xlsx(&self, range: ReportRange) -> ReportResult<Vec<u8>> {
        let report = self.build(range).await?;
        Ok(xlsx::render_progress(&report).map_err(anyhow::Error::new)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use domain_reporting::mock::prelude::*;
    use domain_work_order::model::entity::work_order::{WorkOrder, WorkOrderStatus};

    use super::*;

    fn range() -> ReportRange {
        ReportRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
        .unwrap()
    }

    fn order(no: &str, work_type: &str, status: WorkOrderStatus) -> WorkOrder {
        let mut order = WorkOrder {
            work_order_no: no.to_string(),
            work_type: work_type.to_string(),
            status,
            ..Default::default()
        };
        if status == WorkOrderStatus::Completed {
            order.completion_approved_at =
                Some(Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap());
            order.work_completed_date = NaiveDate::from_ymd_opt(2024, 1, 10);
        }
        order
    }

    #[tokio::test]
    async fn report_has_seven_rows_with_orders_bucketed_and_classified() {
        let mut repo = MockReportQueryRepo::new();
        repo.expect_work_orders_for_progress().returning(|_| {
            Ok(vec![
                order("WO-1", "tyre burst", WorkOrderStatus::Completed),
                order("WO-2", "Wheel", WorkOrderStatus::Ongoing),
                order("WO-3", "battery check", WorkOrderStatus::Pending),
                order("WO-4", "unclassified oddity", WorkOrderStatus::Ongoing),
            ])
        });
        let service = ProgressReportServiceImpl::builder().report_repo(Arc::new(repo)).build();

        let report = service.build(range()).await.unwrap();
        assert_eq!(report.rows.len(), 7);

        let wheel = report
            .rows
            .iter()
            .find(|r| r.bucket == ReportBucket::WheelTyre)
            .unwrap();
        assert_eq!(wheel.completed_count, 1);
        assert_eq!(wheel.completed_orders, vec!["WO-1".to_string()]);
        assert_eq!(wheel.ongoing_count, 1);
        assert_eq!(wheel.ongoing_orders, vec!["WO-2".to_string()]);

        let misc = report
            .rows
            .iter()
            .find(|r| r.bucket == ReportBucket::Miscellaneous)
            .unwrap();
        assert_eq!(misc.ongoing_count, 1);

        let fabrication = report
            .rows
            .iter()
            .find(|r| r.bucket == ReportBucket::Fabrication)
            .unwrap();
        assert_eq!(fabrication.ongoing_count + fabrication.completed_count, 0);
    }

    #[tokio::test]
    async fn rendered_workbook_is_a_zip_archive() {
        let mut repo = MockReportQueryRepo::new();
        repo.expect_work_orders_for_progress()
            .returning(|_| Ok(vec![order("WO-1", "Wheel", WorkOrderStatus::Ongoing)]));
        let service = ProgressReportServiceImpl::builder().report_repo(Arc::new(repo)).build();

        let bytes = service.render_xlsx(range()).await.unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
