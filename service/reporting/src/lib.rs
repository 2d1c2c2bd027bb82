mod progress;
mod technician;
mod xlsx;

#[rustfmt::skip]
pub use {
    progress::ProgressReportServiceImpl,
    technician::TechnicianReportServiceImpl,
};
