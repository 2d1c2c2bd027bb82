use chrono::NaiveDate;
use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportException>;

#[derive(Error, Debug)]
pub enum ReportException {
    #[error("Invalid report range: {from} is after {to}.")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("Report internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for ReportException {
    fn from(e: anyhow::Error) -> Self {
        ReportException::InternalError { source: e }
    }
}
