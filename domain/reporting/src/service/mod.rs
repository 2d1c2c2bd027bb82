use async_trait::async_trait;

use crate::exception::ReportResult;
use crate::model::{ProgressReport, ReportRange, TechnicianPerformanceReport};

#[async_trait]
pub trait ProgressReportService: Send + Sync {
    async fn build(&self, range: ReportRange) -> ReportResult<ProgressReport>;

    /// The report rendered as an xlsx workbook.
    async fn render_xlsx(&self, range: ReportRange) -> ReportResult<Vec<u8>>;
}

#[async_trait]
pub trait TechnicianReportService: Send + Sync {
    async fn build(&self, range: ReportRange) -> ReportResult<TechnicianPerformanceReport>;

    async fn render_xlsx(&self, range: ReportRange) -> ReportResult<Vec<u8>>;
}
