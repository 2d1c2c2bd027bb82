mod action;
mod finding;
mod notification;
mod spare_part;
mod technician;
mod work_order;

#[rustfmt::skip]
pub use {
    action::ActionRepo,
    finding::FindingRepo,
    notification::NotificationRepo,
    spare_part::SparePartRepo,
    technician::TechnicianRepo,
    work_order::WorkOrderRepo,
};
