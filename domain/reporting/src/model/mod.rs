pub mod bucket;
pub mod progress;
pub mod technician;

#[rustfmt::skip]
pub use {
    bucket::{categorize, ReportBucket},
    progress::{ProgressClass, ProgressReport, ProgressRow, ReportRange},
    technician::{TechnicianPerformanceReport, TechnicianRow},
};
