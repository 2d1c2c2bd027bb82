mod detail;
mod document;
mod notification;
mod work_order;

#[rustfmt::skip]
pub use {
    detail::WorkOrderDetailService,
    document::{DocumentStore, ReferenceDocumentService},
    notification::NotificationService,
    work_order::WorkOrderService,
};
