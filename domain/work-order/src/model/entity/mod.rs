pub mod work_order;

mod action;
mod finding;
mod notification;
mod spare_part;
mod technician;

#[rustfmt::skip]
pub use {
    action::Action,
    finding::Finding,
    notification::{Notification, NotificationKind},
    spare_part::SparePart,
    technician::Technician,
    work_order::{WorkOrder, WorkOrderStatus},
};
