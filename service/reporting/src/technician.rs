use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use domain_reporting::exception::ReportResult;
use domain_reporting::model::{ReportRange, TechnicianPerformanceReport, TechnicianRow};
use domain_reporting::repository::ReportQueryRepo;
use domain_reporting::service::TechnicianReportService;
use domain_work_order::model::entity::work_order::WorkOrderStatus;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct TechnicianReportServiceImpl {
    report_repo: Arc<dyn ReportQueryRepo>,
}

#[async_trait]
impl TechnicianReportService for TechnicianReportServiceImpl {
    async fn build(&self, range: ReportRange) -> ReportResult<TechnicianPerformanceReport> {
        let work = self.report_repo.action_work_between(&range).await?;

        let mut by_technician: HashMap<Uuid, TechnicianRow> = HashMap::new();
        for item in work {
            let row = by_technician
                .entry(item.technician_id)
                .or_insert_with(|| TechnicianRow {
                    technician_id: item.technician_id,
                    staff_no: item.staff_no.clone(),
                    name: item.technician_name.clone(),
                    actions_worked: 0,
                    actions_completed: 0,
                    total_minutes: 0,
                });
            row.actions_worked += 1;
            if item.work_order_status == WorkOrderStatus::Completed {
                row.actions_completed += 1;
            }
            row.total_minutes += i64::from(item.duration_minutes);
        }

        let mut rows: Vec<_> = by_technician.into_values().collect();
        rows.sort_by(|a, b| a.staff_no.cmp(&b.staff_no));
        Ok(TechnicianPerformanceReport { range, rows })
    }

    async fn render_xlsx(&self, range: ReportRange) -> ReportResult<Vec<u8>> {
        let report = self.build(range).await?;
        Ok(crate::xlsx::render_technician(&report).map_err(anyhow::Error::new)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use domain_reporting::mock::prelude::*;
    use domain_reporting::repository::ActionWork;

    use super::*;

    fn work(
        technician_id: Uuid,
        staff_no: &str,
        minutes: i32,
        status: WorkOrderStatus,
    ) -> ActionWork {
        ActionWork {
            technician_id,
            staff_no: staff_no.to_string(),
            technician_name: format!("Tech {staff_no}"),
            action_id: Uuid::new_v4(),
            performed_at: Utc::now(),
            duration_minutes: minutes,
            work_order_status: status,
        }
    }

    #[tokio::test]
    async fn aggregates_per_technician_and_sorts_by_staff_no() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut repo = MockReportQueryRepo::new();
        repo.expect_action_work_between().returning(move |_| {
            Ok(vec![
                work(second, "T-200", 45, WorkOrderStatus::Ongoing),
                work(first, "T-100", 30, WorkOrderStatus::Completed),
                work(first, "T-100", 90, WorkOrderStatus::Ongoing),
            ])
        });
        let service = TechnicianReportServiceImpl::builder().report_repo(Arc::new(repo)).build();

        let range = ReportRange::new(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        )
        .unwrap();
        let report = service.build(range).await.unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].staff_no, "T-100");
        assert_eq!(report.rows[0].actions_worked, 2);
        assert_eq!(report.rows[0].actions_completed, 1);
        assert_eq!(report.rows[0].total_minutes, 120);
        assert_eq!(report.rows[1].staff_no, "T-200");
        assert_eq!(report.rows[1].total_minutes, 45);
    }
}
