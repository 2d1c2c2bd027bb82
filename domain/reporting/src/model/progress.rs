use chrono::NaiveDate;
use domain_work_order::model::entity::work_order::{WorkOrder, WorkOrderStatus};
use serde::{Deserialize, Serialize};

use crate::exception::{ReportException, ReportResult};
use crate::model::bucket::ReportBucket;

/// Inclusive date range a report is generated for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> ReportResult<Self> {
        if from > to {
            return Err(ReportException::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }
}

/// How a work order counts in a progress report. Recomputed per report,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressClass {
    Ongoing,
    Completed,
}

impl ProgressClass {
    /// A work order counts as completed only when its status is `Completed`
    /// and every completion timestamp present falls at or before the range
    /// end; anything open, or completed later, counts as ongoing.
    pub fn of(order: &WorkOrder, to: NaiveDate) -> Self {
        let approved_in_range = order
            .completion_approved_at
            .map_or(true, |at| at.date_naive() <= to);
        let completed_in_range = order.work_completed_date.map_or(true, |d| d <= to);
        if order.status == WorkOrderStatus::Completed && approved_in_range && completed_in_range {
            Self::Completed
        } else {
            Self::Ongoing
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub range: ReportRange,
    /// One row per bucket, in `ReportBucket::ALL` order.
    pub rows: Vec<ProgressRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressRow {
    pub bucket: ReportBucket,
    pub ongoing_count: u64,
    pub completed_count: u64,
    pub ongoing_orders: Vec<String>,
    pub completed_orders: Vec<String>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn completed_order(completed: NaiveDate) -> WorkOrder {
        WorkOrder {
            id: Uuid::new_v4(),
            work_order_no: "WO-2024-0042".to_string(),
            status: WorkOrderStatus::Completed,
            completion_approved_at: Some(Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()),
            work_completed_date: Some(completed),
            ..Default::default()
        }
    }

    #[test]
    fn completed_within_range_counts_as_completed() {
        let to = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let order = completed_order(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(ProgressClass::of(&order, to), ProgressClass::Completed);
    }

    #[test]
    fn completed_after_range_counts_as_ongoing() {
        let to = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut order = completed_order(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        order.completion_approved_at = Some(Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap());
        assert_eq!(ProgressClass::of(&order, to), ProgressClass::Ongoing);
    }

    #[test]
    fn open_statuses_count_as_ongoing() {
        let to = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        for status in [
            WorkOrderStatus::Pending,
            WorkOrderStatus::Ongoing,
            WorkOrderStatus::CompletionRequested,
        ] {
            let order = WorkOrder {
                status,
                ..Default::default()
            };
            assert_eq!(ProgressClass::of(&order, to), ProgressClass::Ongoing);
        }
    }

    #[test]
    fn approval_after_range_end_counts_as_ongoing() {
        // The approval timestamp and the completion date disagree; the later
        // evidence wins and the order stays ongoing for this range.
        let to = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut order = completed_order(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        order.completion_approved_at = Some(Utc.with_ymd_and_hms(2024, 1, 18, 9, 0, 0).unwrap());
        assert_eq!(ProgressClass::of(&order, to), ProgressClass::Ongoing);
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        let from = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(
            ReportRange::new(from, to),
            Err(ReportException::InvalidRange { .. })
        ));
    }
}
